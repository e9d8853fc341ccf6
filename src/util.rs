//! Shared utility functions

use chrono::{Local, NaiveDate};

/// Today's local date as a `YYYY-MM-DD` storage key suffix.
///
/// Per-day progress and completion keys are namespaced by this value, so
/// crossing midnight naturally starts a fresh session.
pub fn date_key_today() -> String {
    date_key_for(Local::now().date_naive())
}

/// Storage key suffix for a specific date.
pub fn date_key_for(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Safely truncate a string to at most `max_bytes` while respecting UTF-8 boundaries.
///
/// Arabic and Urdu text is multi-byte throughout; slicing at an arbitrary byte
/// offset would panic. Finds the last valid character boundary at or before
/// `max_bytes` and slices there instead.
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_key_for(date), "2026-03-07");
    }

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_utf8_safe("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_at_arabic_boundary() {
        // Each Arabic letter here is 2 bytes
        let s = "بسم الله";
        let truncated = truncate_utf8_safe(s, 5);
        assert!(truncated.len() <= 5);
        assert!(truncated.is_char_boundary(truncated.len()));
    }

    #[test]
    fn test_truncate_empty_string() {
        assert_eq!(truncate_utf8_safe("", 4), "");
    }
}
