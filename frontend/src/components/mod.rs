pub mod book_card;
pub mod book_detail_modal;
pub mod book_form_modal;
pub mod book_grid;
pub mod header;
pub mod pagination;
pub mod search_bar;
pub mod toast_container;
