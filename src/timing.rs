//! Debounce and throttle wrappers over a [`Scheduler`].
//!
//! `Debounce` delays invocation until `wait_ms` of silence and then runs
//! once with the most recent arguments. `Throttle` is leading-edge: the
//! first call runs immediately and further calls are dropped until `limit_ms`
//! has passed.
//!
//! Pending debounced calls are superseded with a generation counter rather
//! than cancelled, since scheduler tasks cannot be cancelled.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scheduler::Scheduler;

// =============================================================================
// DEBOUNCE
// =============================================================================

struct DebounceInner<A> {
    generation: Cell<u64>,
    pending: RefCell<Option<A>>,
    func: RefCell<Box<dyn FnMut(A)>>,
}

pub struct Debounce<A: 'static> {
    inner: Rc<DebounceInner<A>>,
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u32,
}

impl<A: 'static> Debounce<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, wait_ms: u32, func: impl FnMut(A) + 'static) -> Self {
        Self {
            inner: Rc::new(DebounceInner {
                generation: Cell::new(0),
                pending: RefCell::new(None),
                func: RefCell::new(Box::new(func)),
            }),
            scheduler,
            wait_ms,
        }
    }

    /// Record a call; only the last call in a quiet window reaches `func`.
    pub fn call(&self, args: A) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        *self.inner.pending.borrow_mut() = Some(args);

        let inner = Rc::clone(&self.inner);
        self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                if inner.generation.get() != generation {
                    return;
                }
                let args = inner.pending.borrow_mut().take();
                if let Some(args) = args {
                    let mut func = inner.func.borrow_mut();
                    (*func)(args);
                }
            }),
        );
    }

    /// Whether a call is waiting for its quiet window to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

/// Higher-order form of [`Debounce`].
pub fn debounce<A: 'static>(
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u32,
    func: impl FnMut(A) + 'static,
) -> impl Fn(A) {
    let debounced = Debounce::new(scheduler, wait_ms, func);
    move |args| debounced.call(args)
}

// =============================================================================
// THROTTLE
// =============================================================================

struct ThrottleInner<A> {
    open: Cell<bool>,
    func: RefCell<Box<dyn FnMut(A)>>,
}

pub struct Throttle<A: 'static> {
    inner: Rc<ThrottleInner<A>>,
    scheduler: Rc<dyn Scheduler>,
    limit_ms: u32,
}

impl<A: 'static> Throttle<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, limit_ms: u32, func: impl FnMut(A) + 'static) -> Self {
        Self {
            inner: Rc::new(ThrottleInner {
                open: Cell::new(true),
                func: RefCell::new(Box::new(func)),
            }),
            scheduler,
            limit_ms,
        }
    }

    /// Invoke `func` if the gate is open. Returns whether it ran.
    pub fn call(&self, args: A) -> bool {
        if !self.inner.open.get() {
            return false;
        }
        self.inner.open.set(false);
        {
            let mut func = self.inner.func.borrow_mut();
            (*func)(args);
        }

        let inner = Rc::clone(&self.inner);
        self.scheduler
            .schedule(self.limit_ms, Box::new(move || inner.open.set(true)));
        true
    }
}

/// Higher-order form of [`Throttle`]; the returned closure drops the
/// ran/dropped flag.
pub fn throttle<A: 'static>(
    scheduler: Rc<dyn Scheduler>,
    limit_ms: u32,
    func: impl FnMut(A) + 'static,
) -> impl Fn(A) {
    let throttled = Throttle::new(scheduler, limit_ms, func);
    move |args| {
        throttled.call(args);
    }
}
