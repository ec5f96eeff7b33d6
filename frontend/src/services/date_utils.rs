use chrono::{Datelike, NaiveDate};

/// Today's date in the user's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Long English form used when no browser locale is available (e.g., "January 15, 2025")
pub fn format_date_long(date: &NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

/// Format a publish date the way the user's browser locale renders dates
#[cfg(target_arch = "wasm32")]
pub fn format_date_for_display(date: &NaiveDate) -> String {
    use js_sys::Date;
    use wasm_bindgen::JsValue;

    let js_date =
        Date::new_with_year_month_day(date.year() as u32, date.month0() as i32, date.day() as i32);
    js_date
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| format_date_long(date))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_date_for_display(date: &NaiveDate) -> String {
    format_date_long(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_date_long(&date), "January 15, 2025");

        let date = NaiveDate::from_ymd_opt(1999, 12, 3).unwrap();
        assert_eq!(format_date_long(&date), "December 3, 1999");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_display_format_off_browser_matches_long_form() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_date_for_display(&date), "February 29, 2024");
    }

    #[test]
    fn test_today_is_a_plausible_date() {
        assert!(today().year() >= 2024);
    }
}

// Locale formatting only exists in the browser
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_locale_format_mentions_the_year() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert!(format_date_for_display(&date).contains("2024"));
    }
}
