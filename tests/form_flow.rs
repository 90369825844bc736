//! End-to-end contact form flow through the public API: typing, blur
//! validation, a blocked submit, a successful submit, and the toast it raises.

use std::cell::RefCell;
use std::rc::Rc;

use site_enhance::config::EnhanceConfig;
use site_enhance::error::SubmitError;
use site_enhance::form::{Field, FieldKind, Form, FormHandle, FormPipeline, FormView, SubmitControl};
use site_enhance::notify::{Notifier, Severity, Toast, ToastId, ToastPhase, ToastRenderer, ToastTimings};
use site_enhance::scheduler::ManualScheduler;

#[derive(Default)]
struct Page {
    log: RefCell<Vec<String>>,
}

impl FormView for Page {
    fn field_changed(&self, index: usize, field: &Field) {
        let error = field.error().map(ToString::to_string).unwrap_or_default();
        self.log.borrow_mut().push(format!("field {index} [{}] {error}", field.value()));
    }

    fn control_changed(&self, control: &SubmitControl) {
        self.log
            .borrow_mut()
            .push(format!("button {} disabled={}", control.label(), control.is_disabled()));
    }
}

impl ToastRenderer for Page {
    fn mount(&self, toast: &Toast) {
        self.log.borrow_mut().push(format!("toast+ {} {}", toast.severity.as_str(), toast.message));
    }

    fn phase_changed(&self, toast: &Toast) {
        self.log.borrow_mut().push(format!("toast~ {:?}", toast.phase));
    }

    fn remove(&self, id: ToastId) {
        self.log.borrow_mut().push(format!("toast- {}", id.0));
    }
}

fn contact_form() -> Form {
    Form::new(
        vec![
            Field::new("name", FieldKind::Text).required(true),
            Field::new("email", FieldKind::Email).required(true),
            Field::new("phone", FieldKind::Tel),
            Field::new("message", FieldKind::Other).required(true),
        ],
        SubmitControl::new("Send Message"),
    )
}

struct Harness {
    scheduler: Rc<ManualScheduler>,
    notifier: Notifier,
    pipeline: FormPipeline,
    page: Rc<Page>,
    form: FormHandle,
}

fn harness(config: &EnhanceConfig) -> Harness {
    let scheduler = ManualScheduler::shared();
    let page = Rc::new(Page::default());
    let notifier = Notifier::new(scheduler.clone(), ToastTimings::from(config));
    notifier.set_renderer(page.clone());
    let pipeline = FormPipeline::new(scheduler.clone(), notifier.clone(), config);
    let form = FormHandle::new(contact_form(), page.clone());
    Harness { scheduler, notifier, pipeline, page, form }
}

// =============================================================
// Full flow
// =============================================================

#[test]
fn contact_form_round_trip() {
    let h = harness(&EnhanceConfig::default());

    h.pipeline.on_input(&h.form, 1, "not-an-email");
    assert_eq!(h.pipeline.on_blur(&h.form, 1), Some(false));
    assert_eq!(
        h.form.with(|f| f.fields()[1].error().map(ToString::to_string)),
        Some("Please enter a valid email address".to_owned())
    );

    assert_eq!(h.pipeline.handle_submit(&h.form), Err(SubmitError::Invalid { invalid: 3 }));
    assert!(!h.form.with(|f| f.control.is_disabled()));

    h.pipeline.on_input(&h.form, 0, "Ada");
    h.pipeline.on_input(&h.form, 1, "ada@example.org");
    h.pipeline.on_input(&h.form, 2, "+1 (555) 010-2000");
    h.pipeline.on_input(&h.form, 3, "Hello there");
    assert_eq!(h.form.with(Form::error_count), 0);

    assert_eq!(h.pipeline.handle_submit(&h.form), Ok(()));
    assert_eq!(h.form.with(|f| f.control.label().to_owned()), "Sending...");
    assert_eq!(h.pipeline.handle_submit(&h.form), Err(SubmitError::AlreadySubmitting));

    h.scheduler.advance(1_999);
    assert!(h.notifier.active().is_empty());

    h.scheduler.advance(1);
    let toasts = h.notifier.active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Message sent successfully!");
    assert_eq!(toasts[0].severity, Severity::Success);

    let form = h.form.snapshot();
    assert!(form.fields().iter().all(|field| field.value().is_empty()));
    assert_eq!(form.control.label(), "Send Message");
    assert!(!form.control.is_disabled());

    h.scheduler.run_until_idle();
    assert!(h.notifier.active().is_empty());
}

#[test]
fn page_sees_button_and_toast_in_order() {
    let h = harness(&EnhanceConfig::default());
    for (index, value) in ["Ada", "ada@example.org", "", "Hi"].into_iter().enumerate() {
        h.pipeline.on_input(&h.form, index, value);
    }
    h.page.log.borrow_mut().clear();

    assert_eq!(h.pipeline.handle_submit(&h.form), Ok(()));
    h.scheduler.run_until_idle();

    let log = h.page.log.borrow();
    let button_pending = log.iter().position(|l| l == "button Sending... disabled=true");
    let toast_mounted = log.iter().position(|l| l == "toast+ success Message sent successfully!");
    let button_restored = log.iter().rposition(|l| l == "button Send Message disabled=false");
    assert!(button_pending.is_some());
    assert!(button_pending < toast_mounted);
    assert!(toast_mounted < button_restored);
    assert_eq!(log.last().map(String::as_str), Some("toast- 1"));
    assert!(log.iter().any(|l| l == &format!("toast~ {:?}", ToastPhase::Leaving)));
}

// =============================================================
// Configured timings
// =============================================================

#[test]
fn embedded_config_changes_timings_and_copy() {
    let config = EnhanceConfig::from_json(
        r#"{"submitDelayMs": 500, "submitPendingLabel": "Posting", "submitSuccessMessage": "Thanks!"}"#,
    )
    .expect("config parses");
    let h = harness(&config);
    for (index, value) in ["Ada", "ada@example.org", "", "Hi"].into_iter().enumerate() {
        h.pipeline.on_input(&h.form, index, value);
    }

    assert_eq!(h.pipeline.handle_submit(&h.form), Ok(()));
    assert_eq!(h.form.with(|f| f.control.label().to_owned()), "Posting");

    h.scheduler.advance(500);
    assert_eq!(h.notifier.active()[0].message, "Thanks!");
    assert_eq!(h.scheduler.now_ms(), 500);
}
