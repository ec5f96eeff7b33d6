use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::services::input_filters;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub on_query_change: Callback<String>,
    pub on_search: Callback<()>,
    pub on_add: Callback<()>,
}

/// Search-by-id field with the Search and Add Book buttons
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_query_change = props.on_query_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digits = shared::digits_only(&input.value());
            // Pasted text can still carry non-digits; write the cleaned value back
            if digits != input.value() {
                input.set_value(&digits);
            }
            on_query_change.emit(digits);
        })
    };

    let on_key_press = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if !input_filters::is_allowed_numeric_key(&key, true) {
                e.prevent_default();
            }
            if input_filters::is_submit_key(&key) {
                on_search.emit(());
            }
        })
    };

    let on_search_click = {
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(()))
    };

    let on_add_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <div class="search-bar">
            <input
                type="text"
                inputmode="numeric"
                class="search-input"
                placeholder="Search books by ID"
                value={props.query.clone()}
                oninput={on_input}
                onkeypress={on_key_press}
            />
            <button class="btn btn-primary" onclick={on_search_click}>{"Search"}</button>
            <button class="btn btn-success" onclick={on_add_click}>{"Add Book"}</button>
        </div>
    }
}
