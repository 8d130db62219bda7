use crate::error::IdNumberError;

/// Weight of digit position `i` in the 17-digit expansion: `2^(17-i) mod 11`.
const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Computes the check character over the 17 leading digits of the canonical
/// form. The weighted sum reduced mod 11 gives a value in 0..=10; 10 renders
/// as `X`, everything else as the digit itself.
pub(super) fn check_char(digits: &str) -> Result<char, IdNumberError> {
    let mut sum = 0;
    for (position, c) in digits.chars().take(WEIGHTS.len()).enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| IdNumberError::NonNumericField {
                field: "checksum",
                input: digits.to_string(),
            })?;
        sum += digit * WEIGHTS[position];
    }

    let remainder = sum % 11;
    let value = if remainder <= 1 {
        1 - remainder
    } else {
        12 - remainder
    };

    Ok(match value {
        10 => 'X',
        digit => char::from_digit(digit, 10).unwrap(),
    })
}
