//! Utility functions for UI components

use chrono::{Datelike, NaiveDate};

/// Format a catalog date as en-US M/D/YYYY ("2020-01-01" -> "1/1/2020").
///
/// Catalogs report dates as YYYY, YYYY-MM, or YYYY-MM-DD; partial dates
/// resolve to the first day of the period. Absent or unparseable dates pass
/// through as `None`.
pub fn format_date(date: Option<&str>) -> Option<String> {
    let raw = date?.trim();
    let padded = match raw.len() {
        4 => format!("{raw}-01-01"),
        7 => format!("{raw}-01"),
        _ => raw.to_string(),
    };
    let parsed = NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()?;
    Some(format!(
        "{}/{}/{}",
        parsed.month(),
        parsed.day(),
        parsed.year()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_none_passes_through() {
        assert_eq!(format_date(None), None);
    }

    #[test]
    fn test_format_date_full_date() {
        assert_eq!(format_date(Some("2020-01-01")).as_deref(), Some("1/1/2020"));
        assert_eq!(
            format_date(Some("2019-11-30")).as_deref(),
            Some("11/30/2019")
        );
    }

    #[test]
    fn test_format_date_partial_dates() {
        assert_eq!(format_date(Some("2020")).as_deref(), Some("1/1/2020"));
        assert_eq!(format_date(Some("2020-03")).as_deref(), Some("3/1/2020"));
    }

    #[test]
    fn test_format_date_garbage_is_none() {
        assert_eq!(format_date(Some("n/a")), None);
        assert_eq!(format_date(Some("")), None);
    }
}
