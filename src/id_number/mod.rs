//! Canonicalization and validation of the resident identity-card number.
//!
//! The number exists in two legacy lengths. The 15-digit form encodes the birth
//! year with 2 digits and an implicit `19` century; the 18-character form has a
//! 4-digit year and a trailing checksum character (a digit or `X`). Field
//! layout of the 18-character form, 0-indexed:
//!
//! ```text
//! [0,6)   region code
//! [6,10)  birth year
//! [10,12) birth month
//! [12,14) birth day
//! [14,17) sequence (parity of the last digit encodes gender, odd = male)
//! [17]    checksum character
//! ```

mod checksum;
mod facts;
mod normalize;
mod validity;

pub use facts::{extract_age, is_legal_adult, is_male_by_sequence};
pub use normalize::{normalize_to_15, normalize_to_18};
pub use validity::{equivalent_id_numbers, has_valid_length, is_valid_id_number};

use crate::error::IdNumberError;
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

const LEGACY_LENGTH: usize = 15;
const CANONICAL_LENGTH: usize = 18;

lazy_static! {
    static ref LEGACY_PATTERN: Regex = Regex::new(r"^[0-9]{15}$").unwrap();
    static ref CANONICAL_PATTERN: Regex = Regex::new(r"^[0-9]{17}[0-9Xx]$").unwrap();
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Parses a fixed-position numeric field out of the input. The ranges are byte
/// ranges; a multi-byte character straddling one is reported the same way as a
/// non-digit, since either means the field is not numeric.
fn parse_field(raw: &str, range: Range<usize>, field: &'static str) -> Result<u32, IdNumberError> {
    raw.get(range)
        .and_then(|chunk| chunk.parse::<u32>().ok())
        .ok_or_else(|| IdNumberError::NonNumericField {
            field,
            input: raw.to_string(),
        })
}
