//! Async flows behind each user action.
//!
//! Every flow talks to a [`BookApi`], reports state changes through `dispatch`
//! and outcomes through `notify`. Nothing here is serialized: overlapping
//! flows run side by side and each one replaces the list on its own.

use chrono::NaiveDate;
use shared::{BookForm, BookId};
use yew::Callback;

use crate::services::api::{ApiError, BookApi};
use crate::services::logging::Logger;
use crate::state::library_state::LibraryAction;
use crate::state::toasts::Notification;

const COMPONENT: &str = "library";

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this book?";

/// Fetch the full collection and replace the list. Returns whether it worked.
pub async fn refresh_books<A: BookApi + ?Sized>(
    api: &A,
    dispatch: &Callback<LibraryAction>,
    notify: &Callback<Notification>,
) -> bool {
    match api.list_books().await {
        Ok(books) => {
            dispatch.emit(LibraryAction::BooksLoaded(books));
            notify.emit(Notification::success("Books found"));
            true
        }
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Failed to fetch books: {}", e));
            notify.emit(Notification::error("Failed to fetch books"));
            false
        }
    }
}

/// Look a book up by id, or reload everything when the query is empty
pub async fn search_books<A: BookApi + ?Sized>(
    api: &A,
    query: &str,
    dispatch: &Callback<LibraryAction>,
    notify: &Callback<Notification>,
) {
    let query = query.trim();
    if query.is_empty() {
        refresh_books(api, dispatch, notify).await;
        dispatch.emit(LibraryAction::GoToPage(1));
        return;
    }

    let id = match query.parse::<BookId>() {
        Ok(id) => id,
        Err(_) => {
            let message = format!("Search query {} is not a valid id", query);
            Logger::warn_with_component(COMPONENT, &message);
            dispatch.emit(LibraryAction::SearchCompleted(Vec::new()));
            notify.emit(Notification::info("No book found with the given ID"));
            return;
        }
    };

    match api.get_book(id).await {
        Ok(Some(book)) => {
            dispatch.emit(LibraryAction::SearchCompleted(vec![book]));
            notify.emit(Notification::success("Book found"));
        }
        Ok(None) => {
            dispatch.emit(LibraryAction::SearchCompleted(Vec::new()));
            notify.emit(Notification::info("No book found with the given ID"));
        }
        Err(e) => {
            let message = format!("Search for book {} failed: {}", id, e);
            Logger::error_with_component(COMPONENT, &message);
            notify.emit(Notification::error("Error searching for book"));
            dispatch.emit(LibraryAction::GoToPage(1));
        }
    }
}

/// Send the create form. On success the list is reloaded and the form blanked.
pub async fn submit_create<A: BookApi + ?Sized>(
    api: &A,
    form: &BookForm,
    today: NaiveDate,
    dispatch: &Callback<LibraryAction>,
    notify: &Callback<Notification>,
) {
    let book = match form.to_book() {
        Ok(book) => book,
        Err(_) => {
            notify_invalid(form, notify);
            return;
        }
    };

    match api.create_book(&book).await {
        Ok(created) => {
            Logger::info_with_component(COMPONENT, &format!("Book {} created", created.id));
            refresh_books(api, dispatch, notify).await;
            dispatch.emit(LibraryAction::CreateSucceeded { today });
            notify.emit(Notification::success("Book created successfully"));
        }
        Err(e) => notify_failure(&e, "Failed to create book", "Error creating book", notify),
    }
}

/// Send the edit form as a full replace of the record
pub async fn submit_edit<A: BookApi + ?Sized>(
    api: &A,
    form: &BookForm,
    dispatch: &Callback<LibraryAction>,
    notify: &Callback<Notification>,
) {
    let book = match form.to_book() {
        Ok(book) => book,
        Err(_) => {
            notify_invalid(form, notify);
            return;
        }
    };

    match api.update_book(&book).await {
        Ok(updated) => {
            Logger::info_with_component(COMPONENT, &format!("Book {} updated", updated.id));
            refresh_books(api, dispatch, notify).await;
            dispatch.emit(LibraryAction::EditSucceeded);
            notify.emit(Notification::success("Book updated successfully"));
        }
        Err(e) => notify_failure(&e, "Failed to update book", "Error updating book", notify),
    }
}

/// Delete a book once `confirm` agrees. A declined confirmation makes no call.
pub async fn delete_book<A, C>(
    api: &A,
    id: BookId,
    confirm: C,
    dispatch: &Callback<LibraryAction>,
    notify: &Callback<Notification>,
) where
    A: BookApi + ?Sized,
    C: FnOnce(&str) -> bool,
{
    if !confirm(DELETE_CONFIRMATION) {
        Logger::debug_with_component(COMPONENT, &format!("Delete of book {} declined", id));
        return;
    }

    match api.delete_book(id).await {
        Ok(_payload) => {
            Logger::info_with_component(COMPONENT, &format!("Book {} deleted", id));
            refresh_books(api, dispatch, notify).await;
            notify.emit(Notification::success("Book deleted successfully"));
        }
        Err(e) => notify_failure(&e, "Failed to delete book", "Error deleting book", notify),
    }
}

fn notify_invalid(form: &BookForm, notify: &Callback<Notification>) {
    let message = form
        .validate()
        .first_message()
        .unwrap_or_else(|| "Please fill in every field".to_string());
    Logger::warn_with_component(COMPONENT, &format!("Form rejected: {}", message));
    notify.emit(Notification::error(message));
}

fn notify_failure(error: &ApiError, rejected: &str, failed: &str, notify: &Callback<Notification>) {
    Logger::error_with_component(COMPONENT, &format!("{}: {}", failed, error));
    let message = if error.is_rejection() { rejected } else { failed };
    notify.emit(Notification::error(message));
}
