use shared::{BookField, BookForm};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::services::input_filters;

/// Whether the modal adds a new book or edits an existing one
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Create New Book",
            FormMode::Edit => "Edit Book",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Book",
            FormMode::Edit => "Save Changes",
        }
    }

    fn submit_class(&self) -> &'static str {
        match self {
            FormMode::Create => "btn btn-success",
            FormMode::Edit => "btn btn-primary",
        }
    }

    fn id_prefix(&self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Edit => "edit",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookFormModalProps {
    pub mode: FormMode,
    pub form: BookForm,
    pub on_field_change: Callback<(BookField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(BookFormModal)]
pub fn book_form_modal(props: &BookFormModalProps) -> Html {
    let input_handler = |field: BookField| {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let textarea_handler = |field: BookField| {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let on_page_count_key = Callback::from(|e: KeyboardEvent| {
        if !input_filters::is_allowed_numeric_key(&e.key(), false) {
            e.prevent_default();
        }
    });

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let id = |name: &str| format!("{}-{}", props.mode.id_prefix(), name);
    let value = |field: BookField| props.form.field(field).to_string();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h2 class="modal-title">{props.mode.heading()}</h2>
                <form class="book-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for={id("title")}>{"Title"}</label>
                        <input
                            id={id("title")}
                            type="text"
                            value={value(BookField::Title)}
                            oninput={input_handler(BookField::Title)}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for={id("description")}>{"Description"}</label>
                        <textarea
                            id={id("description")}
                            rows="3"
                            value={value(BookField::Description)}
                            oninput={textarea_handler(BookField::Description)}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for={id("page-count")}>{"Page Count"}</label>
                        <input
                            id={id("page-count")}
                            type="text"
                            inputmode="numeric"
                            value={value(BookField::PageCount)}
                            oninput={input_handler(BookField::PageCount)}
                            onkeypress={on_page_count_key}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for={id("excerpt")}>{"Excerpt"}</label>
                        <textarea
                            id={id("excerpt")}
                            rows="3"
                            value={value(BookField::Excerpt)}
                            oninput={textarea_handler(BookField::Excerpt)}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for={id("publish-date")}>{"Publish Date"}</label>
                        <input
                            id={id("publish-date")}
                            type="date"
                            value={value(BookField::PublishDate)}
                            oninput={input_handler(BookField::PublishDate)}
                            required=true
                        />
                    </div>
                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class={props.mode.submit_class()}>
                            {props.mode.submit_label()}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_labels() {
        assert_eq!(FormMode::Create.heading(), "Create New Book");
        assert_eq!(FormMode::Create.submit_label(), "Create Book");
        assert_eq!(FormMode::Edit.heading(), "Edit Book");
        assert_eq!(FormMode::Edit.submit_label(), "Save Changes");
    }

    #[test]
    fn test_field_ids_do_not_collide_between_modes() {
        assert_ne!(FormMode::Create.id_prefix(), FormMode::Edit.id_prefix());
    }
}
