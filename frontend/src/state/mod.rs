pub mod library_state;
pub mod operations;
pub mod pagination;
pub mod toasts;

pub use library_state::{LibraryAction, LibraryState, ModalState};
pub use toasts::{Notification, Toast, ToastAction, ToastList};
