//! Creation date handling
//!
//! Documents are stamped with the local calendar date when they are built.
//! The stamp can be pinned with an explicit date expression so runs are
//! reproducible.

use chrono::{Local, NaiveDate};
use crate::error::{Error, Result};

/// Date expression types
#[derive(Debug, Clone, PartialEq)]
pub enum DateExpression {
    /// Use today's date
    Today,
    /// Use an explicit date
    Explicit(NaiveDate),
}

/// Parse a date expression string into a DateExpression
///
/// Supported formats:
/// - `""` (empty) or `"today"` → Today
/// - `"2024-11-20"` → Explicit date (ISO format)
/// - `"11/20/2024"` → Explicit date (US format)
pub fn parse_date_expression(expr: &str) -> Result<DateExpression> {
    let expr = expr.trim();

    if expr.is_empty() || expr.eq_ignore_ascii_case("today") {
        return Ok(DateExpression::Today);
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(DateExpression::Explicit(date));
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%m/%d/%Y") {
        return Ok(DateExpression::Explicit(date));
    }

    Err(Error::InvalidDateExpression(format!("Unable to parse date expression: {}", expr)))
}

/// Resolve a DateExpression to a concrete date
pub fn resolve_date(expr: &DateExpression) -> NaiveDate {
    match expr {
        DateExpression::Today => today(),
        DateExpression::Explicit(date) => *date,
    }
}

/// Current date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a creation date as `YYYY-MM-DD`
pub fn format_creation_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_today() {
        assert_eq!(parse_date_expression("today").unwrap(), DateExpression::Today);
        assert_eq!(parse_date_expression("TODAY").unwrap(), DateExpression::Today);
        assert_eq!(parse_date_expression("  ").unwrap(), DateExpression::Today);
    }

    #[test]
    fn test_parse_iso_date() {
        let expr = parse_date_expression("2025-03-09").unwrap();
        match expr {
            DateExpression::Explicit(date) => {
                assert_eq!(date.year(), 2025);
                assert_eq!(date.month(), 3);
                assert_eq!(date.day(), 9);
            }
            _ => panic!("Expected Explicit date"),
        }
    }

    #[test]
    fn test_parse_us_date() {
        let expr = parse_date_expression("11/20/2024").unwrap();
        assert_eq!(
            expr,
            DateExpression::Explicit(NaiveDate::from_ymd_opt(2024, 11, 20).unwrap())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date_expression("yesterday").is_err());
        assert!(parse_date_expression("2024-13-01").is_err());
        assert!(matches!(
            parse_date_expression("Tuesday").unwrap_err(),
            Error::InvalidDateExpression(_)
        ));
    }

    #[test]
    fn test_resolve() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        assert_eq!(resolve_date(&DateExpression::Explicit(date)), date);
        assert_eq!(resolve_date(&DateExpression::Today), Local::now().date_naive());
    }

    #[test]
    fn test_format_creation_date_pads_fields() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        assert_eq!(format_creation_date(&date), "2026-01-07");

        let date = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        assert_eq!(format_creation_date(&date), "2024-11-20");
    }
}
