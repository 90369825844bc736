//! A single tracked input control.

use super::validate::ValidationError;

/// Which format rule applies to a field, derived from the input's `type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    /// Any other input type, and `textarea`.
    Other,
}

impl FieldKind {
    /// Map an HTML `type` attribute (case-insensitive) to a kind.
    #[must_use]
    pub fn from_input_type(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "email" => Self::Email,
            "tel" => Self::Tel,
            _ => Self::Other,
        }
    }

    /// Whether an `<input>` of this `type` takes typed text. Hidden values,
    /// buttons, toggles, and pickers are not tracked, so they are neither
    /// validated nor cleared when a submission completes.
    #[must_use]
    pub fn is_text_entry(raw: &str) -> bool {
        !matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "hidden"
                | "submit"
                | "button"
                | "reset"
                | "image"
                | "checkbox"
                | "radio"
                | "file"
                | "range"
                | "color"
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
    error: Option<ValidationError>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind, ..Self::default() }
    }

    #[must_use]
    pub fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Record an edit. Any displayed error is dropped immediately; it comes
    /// back only when the field is validated again.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None;
    }

    /// The error currently displayed next to the field.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Whether the field carries the errored marking.
    #[must_use]
    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }

    pub(super) fn show_error(&mut self, error: ValidationError) {
        self.error = Some(error);
    }

    pub(super) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(super) fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }
}
