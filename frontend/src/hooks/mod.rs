pub mod use_library;
pub mod use_toasts;
