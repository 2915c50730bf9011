/// Utilities for date formatting
///
/// Provides consistent date formatting across the application
use chrono::{NaiveDate, Utc};
use contracts::shared::wire::parse_date;

/// Format a date as DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date string as sent by the backend; unknown shapes are shown as-is
/// Example: "Fri, 15 Mar 2024 00:00:00 GMT" -> "15/03/2024"
pub fn format_date_str(raw: &str) -> String {
    parse_date(raw)
        .map(format_date)
        .unwrap_or_else(|| raw.to_string())
}

/// Today's date in UTC, as used for form defaults and export file names
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// ISO representation used by `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2024");
        assert_eq!(to_input_value(date), "2024-03-15");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-03-15"), "15/03/2024");
        assert_eq!(format_date_str("Fri, 15 Mar 2024 00:00:00 GMT"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date_str("invalid"), "invalid");
    }
}
