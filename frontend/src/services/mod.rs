pub mod api;
pub mod date_utils;
pub mod input_filters;
pub mod logging;
