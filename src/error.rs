//! Operational error types.
//!
//! DESIGN
//! ======
//! Validation outcomes are not errors in this sense; they live in
//! [`crate::form::ValidationError`] and are shown to the user. The enums here
//! cover conditions the caller must handle or log: a rejected submit, a bad
//! embedded config, unavailable preference storage, or a DOM node the browser
//! binding expected but could not find.

/// Error returned when a submission cannot start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The submit control is already disabled by an in-flight submission.
    #[error("form submit is already in progress")]
    AlreadySubmitting,
    /// At least one field failed validation; errors are displayed on the fields.
    #[error("form has {invalid} invalid field(s)")]
    Invalid { invalid: usize },
}

/// Error returned by [`crate::config::EnhanceConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded JSON could not be parsed into a config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but violates a timing or range constraint.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Error returned by a [`crate::theme::PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Storage is not available (private mode, disabled, no window).
    #[error("preference storage unavailable")]
    Unavailable,
    /// Storage rejected the read or write.
    #[error("preference storage failed on `{key}`: {message}")]
    Io { key: String, message: String },
}

/// Error raised while wiring page behaviors in the browser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// `window` or `document` is not reachable.
    #[error("no browser window/document available")]
    NoDocument,
    /// A required element was not found.
    #[error("element not found: {0}")]
    Missing(String),
    /// A DOM call threw.
    #[error("DOM call `{call}` failed: {message}")]
    Dom { call: &'static str, message: String },
}
