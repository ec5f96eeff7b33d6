use shared::{Book, BookId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookCardProps {
    pub book: Book,
    pub on_open_detail: Callback<Book>,
    pub on_edit: Callback<Book>,
    pub on_delete: Callback<BookId>,
}

#[function_component(BookCard)]
pub fn book_card(props: &BookCardProps) -> Html {
    let on_card_click = {
        let book = props.book.clone();
        let on_open_detail = props.on_open_detail.clone();
        Callback::from(move |_: MouseEvent| on_open_detail.emit(book.clone()))
    };

    // Edit and Delete must not bubble up and open the detail view as well
    let on_edit_click = {
        let book = props.book.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_edit.emit(book.clone());
        })
    };

    let on_delete_click = {
        let id = props.book.id;
        let on_delete = props.on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(id);
        })
    };

    html! {
        <div class="book-card" onclick={on_card_click}>
            <h2 class="book-title">{&props.book.title}</h2>
            <p class="book-description">{&props.book.description}</p>
            <div class="book-card-actions">
                <button class="btn btn-primary" onclick={on_edit_click}>{"Edit"}</button>
                <button class="btn btn-danger" onclick={on_delete_click}>{"Delete"}</button>
            </div>
        </div>
    }
}
