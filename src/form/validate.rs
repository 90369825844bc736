//! Field rules and form-level aggregation.
//!
//! Rules are checked against the trimmed value in a fixed order and the first
//! failure wins: required, then email format, then phone format. Format rules
//! only apply to non-empty values, so an optional field left blank is valid.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use super::field::{Field, FieldKind};
use super::pipeline::Form;

/// A failed field rule. `Display` is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    MissingRequired,
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
    #[error("Please enter a valid phone number")]
    InvalidPhoneFormat,
}

/// Check a raw value against the rules for `kind`.
pub fn check(value: &str, kind: FieldKind, required: bool) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return if required { Err(ValidationError::MissingRequired) } else { Ok(()) };
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmailFormat),
        FieldKind::Tel if !is_valid_phone(value) => Err(ValidationError::InvalidPhoneFormat),
        _ => Ok(()),
    }
}

/// `local@domain.tld`: one `@`, no whitespace, non-empty local part, and a
/// domain with a dot that has text on both sides.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits, spaces, and `-` `+` `(` `)` only; at least one character.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

/// Validate one field and update its displayed error.
///
/// Re-validating an unchanged field replaces the error rather than adding a
/// second one.
pub fn validate_field(field: &mut Field) -> bool {
    match check(field.value(), field.kind, field.required) {
        Ok(()) => {
            field.clear_error();
            true
        }
        Err(error) => {
            field.show_error(error);
            false
        }
    }
}

/// Validate every field, without stopping at the first failure, so all
/// problems are displayed at once.
pub fn validate_form(form: &mut Form) -> bool {
    form.fields_mut()
        .iter_mut()
        .fold(true, |all_valid, field| validate_field(field) && all_valid)
}
