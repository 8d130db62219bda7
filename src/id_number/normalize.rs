use super::checksum::check_char;
use super::{is_blank, CANONICAL_LENGTH, LEGACY_LENGTH};
use crate::error::IdNumberError;

/// Normalizes an identity number to the 18-character canonical form.
///
/// An 18-character input is uppercased and returned as-is: no checksum
/// recomputation and no content validation happen here, callers wanting that
/// use [`is_valid_id_number`](super::is_valid_id_number). A 15-digit input is
/// expanded with the implicit `19` century and gets a computed check character
/// appended. Blank input or any other length yields `None`.
pub fn normalize_to_18(raw: &str) -> Result<Option<String>, IdNumberError> {
    if is_blank(raw) {
        return Ok(None);
    }
    match raw.len() {
        CANONICAL_LENGTH => Ok(Some(raw.to_uppercase())),
        LEGACY_LENGTH => {
            let expanded = match raw.get(..6).zip(raw.get(6..)) {
                Some((region, rest)) => format!("{region}19{rest}"),
                // A multi-byte character straddles the split point, so the
                // year field cannot be numeric.
                None => {
                    return Err(IdNumberError::NonNumericField {
                        field: "century expansion",
                        input: raw.to_string(),
                    })
                }
            };
            let check = check_char(&expanded)?;
            Ok(Some(format!("{expanded}{check}")))
        }
        _ => Ok(None),
    }
}

/// Normalizes an identity number to the 15-digit legacy form by dropping the
/// century digits and the check character. Blank input or an unsupported
/// length yields `None`. Never fails: no checksum is involved.
pub fn normalize_to_15(raw: &str) -> Option<String> {
    if is_blank(raw) {
        return None;
    }
    match raw.len() {
        LEGACY_LENGTH => Some(raw.to_string()),
        CANONICAL_LENGTH => {
            let region = raw.get(..6)?;
            let tail = raw.get(8..17)?;
            Some(format!("{region}{tail}"))
        }
        _ => None,
    }
}
