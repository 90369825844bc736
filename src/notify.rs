//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Each toast runs its own timeline on the [`Scheduler`]:
//!
//! ```text
//! t=0            mounted, Entering
//! t=enter        Visible              (lets the CSS enter transition run)
//! t=duration     Leaving
//! t=duration+exit  removed
//! ```
//!
//! Toasts are independent: there is no queue, no limit, and no cancellation.
//! A [`ToastRenderer`] mirrors the lifecycle into the page.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::EnhanceConfig;
use crate::scheduler::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    /// Suffix of the `toast-{severity}` CSS class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
    pub phase: ToastPhase,
}

/// Renders toasts into the page.
pub trait ToastRenderer {
    fn mount(&self, toast: &Toast);
    fn phase_changed(&self, toast: &Toast);
    fn remove(&self, id: ToastId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    pub duration_ms: u32,
    pub enter_delay_ms: u32,
    pub exit_ms: u32,
}

impl From<&EnhanceConfig> for ToastTimings {
    fn from(config: &EnhanceConfig) -> Self {
        Self {
            duration_ms: config.toast_duration_ms,
            enter_delay_ms: config.toast_enter_delay_ms,
            exit_ms: config.toast_exit_ms,
        }
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self::from(&EnhanceConfig::default())
    }
}

struct NotifierInner {
    scheduler: Rc<dyn Scheduler>,
    timings: ToastTimings,
    next_id: Cell<u64>,
    shown: Cell<u64>,
    toasts: RefCell<Vec<Toast>>,
    renderer: RefCell<Option<Rc<dyn ToastRenderer>>>,
}

/// Cheap-to-clone handle; clones share the same container.
#[derive(Clone)]
pub struct Notifier {
    inner: Rc<NotifierInner>,
}

impl Notifier {
    pub fn new(scheduler: Rc<dyn Scheduler>, timings: ToastTimings) -> Self {
        Self {
            inner: Rc::new(NotifierInner {
                scheduler,
                timings,
                next_id: Cell::new(0),
                shown: Cell::new(0),
                toasts: RefCell::new(Vec::new()),
                renderer: RefCell::new(None),
            }),
        }
    }

    /// Attach the renderer that mirrors toasts into the page.
    pub fn set_renderer(&self, renderer: Rc<dyn ToastRenderer>) {
        *self.inner.renderer.borrow_mut() = Some(renderer);
    }

    /// Show `message` for the default duration.
    pub fn show(&self, message: &str, severity: Severity) -> ToastId {
        self.show_for(message, severity, self.inner.timings.duration_ms)
    }

    /// Show `message` for `duration_ms`, measured from now.
    pub fn show_for(&self, message: &str, severity: Severity, duration_ms: u32) -> ToastId {
        let id = ToastId(self.inner.next_id.get() + 1);
        self.inner.next_id.set(id.0);
        self.inner.shown.set(self.inner.shown.get() + 1);

        let toast = Toast {
            id,
            message: message.to_owned(),
            severity,
            duration_ms,
            phase: ToastPhase::Entering,
        };
        self.inner.toasts.borrow_mut().push(toast.clone());
        if let Some(renderer) = self.renderer() {
            renderer.mount(&toast);
        }

        let enter = self.clone();
        self.inner.scheduler.schedule(
            self.inner.timings.enter_delay_ms,
            Box::new(move || {
                enter.advance(id, ToastPhase::Entering, ToastPhase::Visible);
            }),
        );

        let leave = self.clone();
        self.inner.scheduler.schedule(
            duration_ms,
            Box::new(move || leave.begin_leaving(id)),
        );
        id
    }

    /// Toasts currently in the container, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    /// Total toasts shown since creation, including removed ones.
    #[must_use]
    pub fn shown_count(&self) -> u64 {
        self.inner.shown.get()
    }

    fn renderer(&self) -> Option<Rc<dyn ToastRenderer>> {
        self.inner.renderer.borrow().clone()
    }

    fn advance(&self, id: ToastId, from: ToastPhase, to: ToastPhase) -> bool {
        let updated = {
            let mut toasts = self.inner.toasts.borrow_mut();
            let Some(toast) = toasts.iter_mut().find(|t| t.id == id && t.phase == from) else {
                return false;
            };
            toast.phase = to;
            toast.clone()
        };
        if let Some(renderer) = self.renderer() {
            renderer.phase_changed(&updated);
        }
        true
    }

    fn begin_leaving(&self, id: ToastId) {
        let moved = self.advance(id, ToastPhase::Visible, ToastPhase::Leaving)
            || self.advance(id, ToastPhase::Entering, ToastPhase::Leaving);
        if !moved {
            return;
        }
        let remove = self.clone();
        self.inner.scheduler.schedule(
            self.inner.timings.exit_ms,
            Box::new(move || remove.remove(id)),
        );
    }

    fn remove(&self, id: ToastId) {
        let removed = {
            let mut toasts = self.inner.toasts.borrow_mut();
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        };
        if !removed {
            return;
        }
        log::debug!("toast {} removed", id.0);
        if let Some(renderer) = self.renderer() {
            renderer.remove(id);
        }
    }
}
