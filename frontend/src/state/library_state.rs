use std::rc::Rc;

use chrono::NaiveDate;
use shared::{Book, BookField, BookForm};
use yew::prelude::*;

use crate::config::BOOKS_PER_PAGE;
use crate::state::pagination;

/// Which modal, if any, is on screen. Only one can be open at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Editing(Book),
    Adding,
    Viewing(Book),
}

/// All transient UI state of the library page
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryState {
    /// Last successful fetch or search result
    pub books: Vec<Book>,
    /// 1-based page index into `books`
    pub current_page: usize,
    pub search_query: String,
    pub modal: ModalState,
    pub edit_form: BookForm,
    pub create_form: BookForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryAction {
    /// Replace the whole list with a fresh fetch
    BooksLoaded(Vec<Book>),
    /// Replace the list with a search result and go back to page 1
    SearchCompleted(Vec<Book>),
    GoToPage(usize),
    SetSearchQuery(String),
    OpenEdit(Book),
    OpenAdd,
    OpenDetail(Book),
    CloseModal,
    UpdateEditField(BookField, String),
    UpdateCreateField(BookField, String),
    /// Create went through: close the modal and blank the create form
    CreateSucceeded { today: NaiveDate },
    /// Update went through: close the modal, keep the edit buffer as-is
    EditSucceeded,
}

impl LibraryState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            books: Vec::new(),
            current_page: 1,
            search_query: String::new(),
            modal: ModalState::Closed,
            edit_form: BookForm::blank(today),
            create_form: BookForm::blank(today),
        }
    }

    pub fn apply(&mut self, action: LibraryAction) {
        match action {
            LibraryAction::BooksLoaded(books) => {
                self.books = books;
                self.current_page = pagination::clamp_page(self.current_page, self.page_count());
            }
            LibraryAction::SearchCompleted(books) => {
                self.books = books;
                self.current_page = 1;
            }
            LibraryAction::GoToPage(page) => {
                self.current_page = pagination::clamp_page(page, self.page_count());
            }
            LibraryAction::SetSearchQuery(query) => {
                self.search_query = shared::digits_only(&query);
            }
            LibraryAction::OpenEdit(book) => {
                self.edit_form = BookForm::from(&book);
                self.modal = ModalState::Editing(book);
            }
            LibraryAction::OpenAdd => {
                self.modal = ModalState::Adding;
            }
            LibraryAction::OpenDetail(book) => {
                self.modal = ModalState::Viewing(book);
            }
            LibraryAction::CloseModal | LibraryAction::EditSucceeded => {
                self.modal = ModalState::Closed;
            }
            LibraryAction::UpdateEditField(field, value) => {
                self.edit_form.set_field(field, value);
            }
            LibraryAction::UpdateCreateField(field, value) => {
                self.create_form.set_field(field, value);
            }
            LibraryAction::CreateSucceeded { today } => {
                self.modal = ModalState::Closed;
                self.create_form = BookForm::blank(today);
            }
        }
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.books.len(), BOOKS_PER_PAGE)
    }

    /// Books on the current page
    pub fn current_page_books(&self) -> &[Book] {
        &self.books[pagination::page_range(self.books.len(), self.current_page, BOOKS_PER_PAGE)]
    }
}

impl Reducible for LibraryState {
    type Action = LibraryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn book(id: i64) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            description: format!("Description {}", id),
            page_count: 100 + id as i32,
            excerpt: format!("Excerpt {}", id),
            publish_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        }
    }

    fn books(n: i64) -> Vec<Book> {
        (1..=n).map(book).collect()
    }

    #[test]
    fn test_new_state_is_closed_and_blank() {
        let state = LibraryState::new(today());
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.current_page, 1);
        assert!(state.books.is_empty());
        assert_eq!(state.create_form, BookForm::blank(today()));
        assert_eq!(state.page_count(), 0);
        assert!(state.current_page_books().is_empty());
    }

    #[test]
    fn test_pages_show_nine_books() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::BooksLoaded(books(20)));
        assert_eq!(state.page_count(), 3);

        let ids: Vec<i64> = state.current_page_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());

        state.apply(LibraryAction::GoToPage(3));
        let ids: Vec<i64> = state.current_page_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![19, 20]);
    }

    #[test]
    fn test_reload_keeps_page_but_clamps_when_list_shrinks() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::BooksLoaded(books(20)));
        state.apply(LibraryAction::GoToPage(2));

        state.apply(LibraryAction::BooksLoaded(books(19)));
        assert_eq!(state.current_page, 2);

        state.apply(LibraryAction::BooksLoaded(books(5)));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_search_result_resets_to_first_page() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::BooksLoaded(books(30)));
        state.apply(LibraryAction::GoToPage(3));

        state.apply(LibraryAction::SearchCompleted(vec![book(12)]));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.books, vec![book(12)]);
    }

    #[test]
    fn test_search_query_keeps_digits_only() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::SetSearchQuery("4a2".to_string()));
        assert_eq!(state.search_query, "42");
    }

    #[test]
    fn test_opening_edit_from_detail_switches_directly() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::OpenDetail(book(2)));
        assert_eq!(state.modal, ModalState::Viewing(book(2)));

        state.apply(LibraryAction::OpenEdit(book(1)));
        assert_eq!(state.modal, ModalState::Editing(book(1)));
        assert_eq!(state.edit_form, BookForm::from(&book(1)));
    }

    #[test]
    fn test_opening_detail_from_edit_switches_directly() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::OpenEdit(book(1)));
        state.apply(LibraryAction::OpenDetail(book(3)));
        assert_eq!(state.modal, ModalState::Viewing(book(3)));
    }

    #[test]
    fn test_close_keeps_form_buffers() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::OpenAdd);
        state.apply(LibraryAction::UpdateCreateField(BookField::Title, "Draft".to_string()));
        state.apply(LibraryAction::CloseModal);

        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.create_form.title, "Draft");
    }

    #[test]
    fn test_create_success_blanks_the_form() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::OpenAdd);
        state.apply(LibraryAction::UpdateCreateField(BookField::Title, "Draft".to_string()));
        state.apply(LibraryAction::UpdateCreateField(BookField::PageCount, "12x".to_string()));
        assert_eq!(state.create_form.page_count, "12");

        let later = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        state.apply(LibraryAction::CreateSucceeded { today: later });
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.create_form, BookForm::blank(later));
    }

    #[test]
    fn test_edit_success_keeps_the_edit_buffer() {
        let mut state = LibraryState::new(today());
        state.apply(LibraryAction::OpenEdit(book(4)));
        state.apply(LibraryAction::UpdateEditField(BookField::Title, "Renamed".to_string()));
        state.apply(LibraryAction::EditSucceeded);

        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.edit_form.title, "Renamed");
        assert_eq!(state.edit_form.id, 4);
    }

    #[test]
    fn test_reducer_returns_new_state() {
        let state = Rc::new(LibraryState::new(today()));
        let next = state.clone().reduce(LibraryAction::OpenAdd);
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(next.modal, ModalState::Adding);
    }
}
