//! Per-field rule evaluation
//!
//! A field's rules are evaluated sequentially and each failing rule
//! overwrites the message of the one before it, so when several rules fail
//! only the last message is kept. This mirrors the form's established
//! behavior and is relied on by the controller's error rendering.

use crate::email::is_valid_email;
use crate::string::{is_blank, meets_min_length};

/// Message shown for a required field left empty
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message shown for a malformed email address
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Message shown when the name is shorter than [`NAME_MIN_LENGTH`]
pub const NAME_LENGTH_MESSAGE: &str = "Name must be at least 2 characters";

/// Minimum trimmed length for the name field
pub const NAME_MIN_LENGTH: usize = 2;

/// Minimum-length rule with its user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub min: usize,
    pub message: &'static str,
}

/// Validation rules for a single field
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRules {
    /// Empty input is itself an error
    pub required: bool,
    /// Non-empty input must look like an email address
    pub email: bool,
    /// Non-empty input must meet a minimum trimmed length
    pub length: Option<LengthRule>,
}

impl FieldRules {
    /// Rules for the RSVP name field
    pub fn name() -> Self {
        Self {
            required: true,
            email: false,
            length: Some(LengthRule {
                min: NAME_MIN_LENGTH,
                message: NAME_LENGTH_MESSAGE,
            }),
        }
    }
}

/// Outcome of one validation pass over one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when `valid` is true
    pub message: &'static str,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: "",
        }
    }

    fn fail(&mut self, message: &'static str) {
        self.valid = false;
        self.message = message;
    }
}

/// Evaluate a field value against its rules
///
/// Rules run in a fixed order: required, email format, minimum length.
/// The email and length rules only apply to non-blank input, and the raw
/// (untrimmed) value is matched against the email pattern, so surrounding
/// whitespace fails it.
pub fn evaluate(value: &str, rules: &FieldRules) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if rules.required && is_blank(value) {
        result.fail(REQUIRED_MESSAGE);
    }

    if rules.email && !is_blank(value) && !is_valid_email(value) {
        result.fail(EMAIL_MESSAGE);
    }

    if let Some(length) = rules.length {
        if !is_blank(value) && !meets_min_length(value, length.min) {
            result.fail(length.message);
        }
    }

    result
}
