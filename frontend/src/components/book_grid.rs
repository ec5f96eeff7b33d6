use shared::{Book, BookId};
use yew::prelude::*;

use super::book_card::BookCard;

#[derive(Properties, PartialEq)]
pub struct BookGridProps {
    /// Books on the current page only
    pub books: Vec<Book>,
    pub on_open_detail: Callback<Book>,
    pub on_edit: Callback<Book>,
    pub on_delete: Callback<BookId>,
}

#[function_component(BookGrid)]
pub fn book_grid(props: &BookGridProps) -> Html {
    if props.books.is_empty() {
        return html! { <div class="empty-state">{"No books to show"}</div> };
    }

    html! {
        <div class="book-grid">
            {for props.books.iter().map(|book| html! {
                <BookCard
                    key={book.id}
                    book={book.clone()}
                    on_open_detail={props.on_open_detail.clone()}
                    on_edit={props.on_edit.clone()}
                    on_delete={props.on_delete.clone()}
                />
            })}
        </div>
    }
}
