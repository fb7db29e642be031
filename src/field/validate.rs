//! Field value validators
//!
//! Validators are plain function values so each [`super::FieldId`] can pair
//! its label with a predicate without a type per field.

/// A pure predicate over a raw field value
pub type Validator = fn(&str) -> bool;

/// Length of a personal number (JMBG)
pub const PERSONAL_NUMBER_LEN: usize = 13;

/// Accepts every value, including the empty string
pub fn always_valid(_value: &str) -> bool {
    true
}

/// Rejects every value
pub fn never_valid(_value: &str) -> bool {
    false
}

/// Check the personal number format: exactly 13 ASCII digits
///
/// The mod 11 checksum digit is not verified. Issued documents exist whose
/// personal number has an incorrect checksum, and those must be accepted.
pub fn is_personal_number_format(value: &str) -> bool {
    value.len() == PERSONAL_NUMBER_LEN && value.bytes().all(|b| b.is_ascii_digit())
}
