use super::normalize::{normalize_to_15, normalize_to_18};
use super::{
    is_blank, parse_field, CANONICAL_LENGTH, CANONICAL_PATTERN, LEGACY_LENGTH, LEGACY_PATTERN,
};
use crate::calendar::Calendar;
use crate::error::IdNumberError;

const MIN_BIRTH_YEAR: i32 = 1900;

/// Checks only that the input has one of the two supported lengths. Content is
/// not inspected.
pub fn has_valid_length(raw: &str) -> bool {
    if is_blank(raw) {
        return false;
    }
    raw.len() == LEGACY_LENGTH || raw.len() == CANONICAL_LENGTH
}

/// Full validity check: format pattern, calendar birth date, and optionally a
/// minimum age. Pass a negative `min_age` to skip the age constraint.
///
/// Shape problems (blank input, wrong length, stray characters, impossible
/// dates) are rejections, not errors; `Err` is reserved for numeric fields
/// that fail to parse after the pattern already matched.
pub fn is_valid_id_number(
    raw: &str,
    min_age: i32,
    calendar: &impl Calendar,
) -> Result<bool, IdNumberError> {
    if is_blank(raw) {
        return Ok(false);
    }
    if !LEGACY_PATTERN.is_match(raw) && !CANONICAL_PATTERN.is_match(raw) {
        return Ok(false);
    }

    let canonical = match normalize_to_18(raw)? {
        Some(canonical) => canonical,
        None => return Ok(false),
    };

    let year = parse_field(&canonical, 6..10, "birth year")? as i32;
    let month = parse_field(&canonical, 10..12, "birth month")?;
    let day = parse_field(&canonical, 12..14, "birth day")?;

    let current_year = calendar.current_year();
    if !is_valid_birth_date(year, month, day, current_year) {
        return Ok(false);
    }
    if min_age > current_year - year {
        return Ok(false);
    }
    Ok(true)
}

/// Tests whether two raw strings denote the same identity number across the
/// two formats. Both sides must independently pass the full validity check;
/// the comparison itself is case-insensitive on the check character.
pub fn equivalent_id_numbers(
    a: &str,
    b: &str,
    calendar: &impl Calendar,
) -> Result<bool, IdNumberError> {
    if is_blank(a) || is_blank(b) {
        return Ok(false);
    }
    if !is_valid_id_number(a, -1, calendar)? || !is_valid_id_number(b, -1, calendar)? {
        return Ok(false);
    }

    if let Some(legacy) = normalize_to_15(a) {
        if legacy.eq_ignore_ascii_case(b) {
            return Ok(true);
        }
    }
    if let Some(canonical) = normalize_to_18(a)? {
        if canonical.eq_ignore_ascii_case(b) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_valid_birth_date(year: i32, month: u32, day: u32, current_year: i32) -> bool {
    if year < MIN_BIRTH_YEAR || year > current_year {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }
    day >= 1 && day <= days_in_month(year, month)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
