//! Form model, submit control, and the submission lifecycle.
//!
//! DESIGN
//! ======
//! `Form` is plain data: its fields in document order plus the submit
//! control. `FormPipeline` applies user events to a shared `FormHandle` and
//! pushes the resulting state to the handle's `FormView`, which the browser
//! binding implements by patching the DOM.
//!
//! The control is disabled synchronously inside `submit`, before the send is
//! scheduled, so no second submission can start while one is in flight. The
//! simulated send always completes; there is no failure branch.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::field::Field;
use super::validate::{validate_field, validate_form};
use crate::config::EnhanceConfig;
use crate::error::SubmitError;
use crate::notify::{Notifier, Severity};
use crate::scheduler::Scheduler;

// =============================================================================
// SUBMIT CONTROL
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// The form's submit button. Label and enabled state follow from
/// [`SubmissionState`] and the labels captured when the submit began.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitControl {
    state: SubmissionState,
    label: String,
    pending_label: String,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Text currently displayed on the control.
    #[must_use]
    pub fn label(&self) -> &str {
        match self.state {
            SubmissionState::Idle => &self.label,
            SubmissionState::Submitting => &self.pending_label,
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Set the idle label, e.g. when the page rewrites the button text.
    /// Takes effect immediately when idle, otherwise on restore.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    fn begin(&mut self, pending_label: &str) -> Result<(), SubmitError> {
        if self.state == SubmissionState::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        pending_label.clone_into(&mut self.pending_label);
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    fn restore(&mut self) {
        self.state = SubmissionState::Idle;
    }
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
    pub control: SubmitControl,
}

impl Form {
    #[must_use]
    pub fn new(fields: Vec<Field>, control: SubmitControl) -> Self {
        Self { fields, control }
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Index of the first field called `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields currently showing an error.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_errored()).count()
    }

    /// Clear every value and error, like `HTMLFormElement.reset()` on a
    /// form without default values.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}

// =============================================================================
// VIEW
// =============================================================================

/// Receives state changes to mirror them in the page.
///
/// Both methods default to no-ops so a view may observe only what it renders.
pub trait FormView {
    /// The field at `index` changed its value or displayed error.
    fn field_changed(&self, _index: usize, _field: &Field) {}

    /// The submit control changed its label or enabled state.
    fn control_changed(&self, _control: &SubmitControl) {}
}

/// A view that renders nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedView;

impl FormView for DetachedView {}

/// A form shared between event handlers and scheduled completions, together
/// with the view it renders into.
#[derive(Clone)]
pub struct FormHandle {
    form: Rc<RefCell<Form>>,
    view: Rc<dyn FormView>,
}

impl FormHandle {
    pub fn new(form: Form, view: Rc<dyn FormView>) -> Self {
        Self { form: Rc::new(RefCell::new(form)), view }
    }

    /// A handle with no attached view.
    #[must_use]
    pub fn detached(form: Form) -> Self {
        Self::new(form, Rc::new(DetachedView))
    }

    /// Clone of the current form state.
    #[must_use]
    pub fn snapshot(&self) -> Form {
        self.form.borrow().clone()
    }

    /// Re-capture the submit control's idle label from the page. Ignored
    /// while a submission is in flight, when the page shows the pending label.
    /// Returns whether the label was taken.
    pub fn refresh_label(&self, label: &str) -> bool {
        let mut form = self.form.borrow_mut();
        if form.control.is_disabled() {
            return false;
        }
        form.control.set_label(label);
        true
    }

    /// Run `f` with the form borrowed, for read-only queries.
    pub fn with<R>(&self, f: impl FnOnce(&Form) -> R) -> R {
        f(&self.form.borrow())
    }

    fn render_field(&self, index: usize) {
        let form = self.form.borrow();
        if let Some(field) = form.fields.get(index) {
            self.view.field_changed(index, field);
        }
    }

    fn render_all(&self) {
        let form = self.form.borrow();
        for (index, field) in form.fields.iter().enumerate() {
            self.view.field_changed(index, field);
        }
        self.view.control_changed(&form.control);
    }

    fn render_control(&self) {
        self.view.control_changed(&self.form.borrow().control);
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Drives validation and submission for any number of forms.
#[derive(Clone)]
pub struct FormPipeline {
    scheduler: Rc<dyn Scheduler>,
    notifier: Notifier,
    submit_delay_ms: u32,
    pending_label: String,
    success_message: String,
}

impl FormPipeline {
    pub fn new(scheduler: Rc<dyn Scheduler>, notifier: Notifier, config: &EnhanceConfig) -> Self {
        Self {
            scheduler,
            notifier,
            submit_delay_ms: config.submit_delay_ms,
            pending_label: config.submit_pending_label.clone(),
            success_message: config.submit_success_message.clone(),
        }
    }

    /// `input` event: store the value and drop any displayed error.
    pub fn on_input(&self, handle: &FormHandle, index: usize, value: &str) {
        {
            let mut form = handle.form.borrow_mut();
            let Some(field) = form.fields.get_mut(index) else {
                return;
            };
            field.set_value(value);
        }
        handle.render_field(index);
    }

    /// `blur` event: validate the field. Returns `None` for an unknown index.
    pub fn on_blur(&self, handle: &FormHandle, index: usize) -> Option<bool> {
        let valid = {
            let mut form = handle.form.borrow_mut();
            validate_field(form.fields.get_mut(index)?)
        };
        handle.render_field(index);
        Some(valid)
    }

    /// Validate every field of the form and render the results.
    pub fn validate_form(&self, handle: &FormHandle) -> bool {
        let valid = validate_form(&mut handle.form.borrow_mut());
        handle.render_all();
        valid
    }

    /// `submit` event: validate, then start the submission if all fields pass.
    /// On failure the field errors stay displayed and nothing is sent.
    pub fn handle_submit(&self, handle: &FormHandle) -> Result<(), SubmitError> {
        if handle.form.borrow().control.is_disabled() {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !self.validate_form(handle) {
            let invalid = handle.with(Form::error_count);
            log::debug!("form submit blocked: {invalid} invalid field(s)");
            return Err(SubmitError::Invalid { invalid });
        }
        self.submit(handle)
    }

    /// Start the submission lifecycle. The caller is expected to have
    /// validated the form.
    ///
    /// The control switches to the pending label and is disabled before this
    /// returns. After the send delay a success toast is shown, the fields are
    /// cleared, and the control is restored.
    pub fn submit(&self, handle: &FormHandle) -> Result<(), SubmitError> {
        handle.form.borrow_mut().control.begin(&self.pending_label)?;
        handle.render_control();
        log::debug!("form submit started; completing in {}ms", self.submit_delay_ms);

        let handle = handle.clone();
        let notifier = self.notifier.clone();
        let message = self.success_message.clone();
        self.scheduler.schedule(
            self.submit_delay_ms,
            Box::new(move || {
                notifier.show(&message, Severity::Success);
                {
                    let mut form = handle.form.borrow_mut();
                    form.reset();
                    form.control.restore();
                }
                handle.render_all();
                log::debug!("form submit completed");
            }),
        );
        Ok(())
    }
}
