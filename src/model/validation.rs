use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A failed registration check. `Display` is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be blank")]
    BlankName,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Please select at least one activity")]
    NoActivities,
    #[error("Invalid credit card number")]
    InvalidCardNumber,
    #[error("Invalid ZIP code")]
    InvalidZipCode,
    #[error("Invalid CVV")]
    InvalidCvv,
}

// Character classes are spelled out: `\d` and `(?i)` are Unicode-aware in `regex`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@.]+\.[A-Za-z]+$").expect("valid hardcoded regex"));

static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,16}$").expect("valid hardcoded regex"));

static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid hardcoded regex"));

static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("valid hardcoded regex"));

/// `local@domain.tld`: one `@`, a dot-free domain, and a letters-only tld of any length.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// 13 to 16 ASCII digits. No checksum.
pub fn is_card_number(value: &str) -> bool {
    CARD_NUMBER_RE.is_match(value)
}

/// Exactly 5 ASCII digits.
pub fn is_zip_code(value: &str) -> bool {
    ZIP_CODE_RE.is_match(value)
}

/// Exactly 3 ASCII digits.
pub fn is_cvv(value: &str) -> bool {
    CVV_RE.is_match(value)
}

/// Validates the attendee name: must contain something besides whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::BlankName)
    } else {
        Ok(())
    }
}

/// Validates the email address after trimming surrounding whitespace.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_email_shaped(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates that at least one activity is checked.
pub fn validate_activities(checked: usize) -> Result<(), ValidationError> {
    match checked {
        0 => Err(ValidationError::NoActivities),
        _ => Ok(()),
    }
}

/// Validates credit card details in priority order: number, then zip, then cvv.
///
/// Only the first failure is reported; later fields are not inspected.
pub fn validate_card_details(
    card_number: &str,
    zip_code: &str,
    cvv: &str,
) -> Result<(), ValidationError> {
    if !is_card_number(card_number.trim()) {
        Err(ValidationError::InvalidCardNumber)
    } else if !is_zip_code(zip_code.trim()) {
        Err(ValidationError::InvalidZipCode)
    } else if !is_cvv(cvv.trim()) {
        Err(ValidationError::InvalidCvv)
    } else {
        Ok(())
    }
}
