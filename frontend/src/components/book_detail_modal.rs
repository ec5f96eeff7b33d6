use shared::Book;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct BookDetailModalProps {
    pub book: Book,
    pub on_close: Callback<()>,
}

/// Read-only view of every field of a book
#[function_component(BookDetailModal)]
pub fn book_detail_modal(props: &BookDetailModalProps) -> Html {
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

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let book = &props.book;
    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h2 class="modal-title">{&book.title}</h2>
                <p><strong>{"Description: "}</strong>{&book.description}</p>
                <p><strong>{"Page Count: "}</strong>{book.page_count}</p>
                <p><strong>{"Excerpt: "}</strong>{&book.excerpt}</p>
                <p>
                    <strong>{"Publish Date: "}</strong>
                    {date_utils::format_date_for_display(&book.publish_date)}
                </p>
                <button class="btn btn-primary" onclick={on_close_click}>{"Close"}</button>
            </div>
        </div>
    }
}
