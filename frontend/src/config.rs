//! Build-time configuration for the library front-end.

/// Base URL used when `LIBRARY_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7224";

/// Number of books shown on a single page of the grid
pub const BOOKS_PER_PAGE: usize = 9;

/// How long a notification stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 3000;

/// Resolve the API base URL, preferring the `LIBRARY_API_BASE_URL` build variable
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("LIBRARY_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("http://example.test/"), "http://example.test");
        assert_eq!(normalize_base_url(" http://example.test// "), "http://example.test");
        assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_api_base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
