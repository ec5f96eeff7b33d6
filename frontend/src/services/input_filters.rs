//! Keystroke filters for the numeric-only inputs (search by id, page count).

/// Whether a `keypress` with this `KeyboardEvent.key` may reach a numeric input
pub fn is_allowed_numeric_key(key: &str, allow_enter: bool) -> bool {
    if allow_enter && key == "Enter" {
        return true;
    }
    key.len() == 1 && key.chars().all(|c| c.is_ascii_digit())
}

pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_pass() {
        for key in ["0", "5", "9"] {
            assert!(is_allowed_numeric_key(key, false));
        }
    }

    #[test]
    fn test_non_digits_are_suppressed() {
        for key in ["a", "-", ".", "e", " ", "12"] {
            assert!(!is_allowed_numeric_key(key, true), "{} should be blocked", key);
        }
    }

    #[test]
    fn test_enter_only_allowed_in_search() {
        assert!(is_allowed_numeric_key("Enter", true));
        assert!(!is_allowed_numeric_key("Enter", false));
        assert!(is_submit_key("Enter"));
        assert!(!is_submit_key("1"));
    }
}
