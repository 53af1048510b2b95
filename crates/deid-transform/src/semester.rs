//! Semester code shifting.

/// Shifts a 6-character `YYYYSS` semester code forward by `years`.
///
/// The first four characters must parse as an integer year; the trailing
/// two are carried over untouched. The shifted year is written back without
/// re-padding, so `"009901"` shifted by 1 becomes `"10001"`. Returns `None`
/// for any other shape; callers keep the original text.
pub fn shift_semester(value: &str, years: i32) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 6 {
        return None;
    }
    let year_part: String = chars[..4].iter().collect();
    let year = year_part.parse::<i32>().ok()?;
    let tail: String = chars[4..].iter().collect();
    Some(format!("{}{}", year + years, tail))
}
