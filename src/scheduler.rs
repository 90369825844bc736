//! Fire-once timers on a single-threaded event loop.
//!
//! DESIGN
//! ======
//! Every delayed behavior in the crate (toast phases, the simulated send,
//! debounce and throttle gates) goes through [`Scheduler`]. In the browser it
//! is backed by `setTimeout` via `gloo-timers`; in tests [`ManualScheduler`]
//! keeps a virtual clock that only moves when the test advances it, so timing
//! assertions are exact and need no executor.
//!
//! Tasks due at the same instant run in the order they were scheduled.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A callback run once after its delay elapses.
pub type Task = Box<dyn FnOnce()>;

/// Schedules fire-once callbacks. No cancellation; callers that need to
/// supersede a pending task compare a generation counter when it fires.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay_ms: u32, task: Task) {
        (**self).schedule(delay_ms, task);
    }
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// Deterministic scheduler driven by explicit [`ManualScheduler::advance`] calls.
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle, the form most components take.
    #[must_use]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Number of tasks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `ms`, running every task that falls due,
    /// including tasks scheduled by tasks run during this call.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get().saturating_add(ms);
        while let Some(pending) = self.pop_due(target) {
            self.now_ms.set(pending.due_ms);
            (pending.task)();
        }
        self.now_ms.set(target);
    }

    /// Run tasks until the queue is empty, advancing the clock as needed.
    pub fn run_until_idle(&self) {
        while let Some(pending) = self.pop_due(u64::MAX) {
            self.now_ms.set(pending.due_ms.max(self.now_ms.get()));
            (pending.task)();
        }
    }

    fn pop_due(&self, limit_ms: u64) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= limit_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        Some(queue.swap_remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}

// =============================================================================
// BROWSER SCHEDULER
// =============================================================================

/// `setTimeout`-backed scheduler. Timeouts are detached so they fire even
/// after the handle goes out of scope.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
