use super::{is_blank, parse_field, CANONICAL_LENGTH, LEGACY_LENGTH};
use crate::calendar::Calendar;
use crate::error::IdNumberError;

/// Age in whole calendar years, with no month/day adjustment: the difference
/// between the current year and the encoded birth year. Blank input or an
/// unsupported length yields 0; a non-numeric year field is fatal.
pub fn extract_age(raw: &str, calendar: &impl Calendar) -> Result<i32, IdNumberError> {
    if is_blank(raw) {
        return Ok(0);
    }
    let birth_year = match raw.len() {
        LEGACY_LENGTH => 1900 + parse_field(raw, 6..8, "birth year")? as i32,
        CANONICAL_LENGTH => parse_field(raw, 6..10, "birth year")? as i32,
        _ => return Ok(0),
    };
    Ok(calendar.current_year() - birth_year)
}

/// Whether the person has reached the age of majority (18 years).
///
/// The 18th-birthday threshold is formed by concatenating `birth_year + 18`
/// with the 4-digit month-day block and comparing against today, both packed
/// as YYYYMMDD numbers. The year keeps its natural width; birth years are at
/// least 1900, so the concatenation always lines up. Blank input, an
/// unsupported length, or a non-numeric field yields `false`.
pub fn is_legal_adult(raw: &str, calendar: &impl Calendar) -> bool {
    if is_blank(raw) {
        return false;
    }
    let (birth_year, month_day) = match raw.len() {
        LEGACY_LENGTH => (
            parse_field(raw, 6..8, "birth year").map(|year| 1900 + year as i32),
            raw.get(8..12),
        ),
        CANONICAL_LENGTH => (
            parse_field(raw, 6..10, "birth year").map(|year| year as i32),
            raw.get(10..14),
        ),
        _ => return false,
    };
    let (birth_year, month_day) = match (birth_year, month_day) {
        (Ok(year), Some(month_day)) => (year, month_day),
        _ => return false,
    };

    let threshold: u64 = match format!("{}{month_day}", birth_year + 18).parse() {
        Ok(threshold) => threshold,
        Err(_) => return false,
    };
    threshold <= u64::from(calendar.today_yyyymmdd())
}

/// Whether the sequence parity digit marks the holder as male (odd digit).
///
/// Assumes pre-validated input: no format checking happens here, and a missing
/// or non-numeric digit at the parity position is fatal. The digit sits at
/// position 16 for 18-character input and position 14 otherwise.
pub fn is_male_by_sequence(raw: &str) -> Result<bool, IdNumberError> {
    if is_blank(raw) {
        return Ok(false);
    }
    let position = if raw.len() == CANONICAL_LENGTH { 16 } else { 14 };
    let digit = raw
        .chars()
        .nth(position)
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| IdNumberError::NonNumericField {
            field: "sequence parity digit",
            input: raw.to_string(),
        })?;
    Ok(digit % 2 == 1)
}
