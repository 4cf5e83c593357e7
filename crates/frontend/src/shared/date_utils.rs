//! Date and time formatting for tables and detail modals.

use chrono::{DateTime, NaiveDate};

/// Format an ISO timestamp as `YYYY-MM-DD HH:MM`.
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
///
/// Unparseable input is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Date part of an ISO date or timestamp.
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Optional timestamp, with `fallback` when missing.
pub fn format_datetime_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+03:00"), "2024-12-31 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_missing_last_login() {
        assert_eq!(format_datetime_or(None, "Never"), "Never");
        assert_eq!(format_datetime_or(Some(""), "Never"), "Never");
        assert_eq!(
            format_datetime_or(Some("2024-01-02T03:04:05Z"), "Never"),
            "2024-01-02 03:04"
        );
    }
}
