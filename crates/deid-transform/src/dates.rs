//! Calendar date shifting.

use chrono::{Datelike, NaiveDate};

/// Shifts a `YYYY-MM-DD` date back by `years`, keeping month and day.
///
/// Returns `None` when the value does not parse in that exact format, or
/// when the shifted date does not exist (Feb 29 moved to a non-leap year);
/// callers keep the original text in both cases.
pub fn shift_date(value: &str, years: i32) -> Option<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let shifted = date.with_year(date.year() - years)?;
    Some(shifted.format("%Y-%m-%d").to_string())
}
