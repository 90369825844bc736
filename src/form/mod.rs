//! Form validation and submission feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fields are validated on blur and on submit; an edit clears the field's
//! error straight away without re-validating. A valid submit disables the
//! button, simulates the send, then shows a success toast and resets the form.

mod field;
mod pipeline;
mod slots;
mod validate;

pub use field::{Field, FieldKind};
pub use pipeline::{
    DetachedView, Form, FormHandle, FormPipeline, FormView, SubmissionState, SubmitControl,
};
pub use slots::MessageSlots;
pub use validate::{ValidationError, check, is_valid_email, is_valid_phone, validate_field, validate_form};
