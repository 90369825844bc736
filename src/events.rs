//! Event kind → handler registry.
//!
//! Handlers for a kind run synchronously in registration order. The browser
//! binding installs one DOM listener per kind and forwards into a
//! [`Dispatcher`], so several page behaviors can share a single `scroll` or
//! `keydown` listener.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::collections::HashMap;
use std::hash::Hash;

/// Page-level events the enhancements react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Scroll,
    KeyDown,
    Load,
}

/// Handle returned by [`Dispatcher::on`], usable with [`Dispatcher::off`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

pub struct Dispatcher<K, E> {
    next_id: u64,
    handlers: HashMap<K, Vec<(HandlerId, Handler<E>)>>,
}

impl<K, E> Default for Dispatcher<K, E> {
    fn default() -> Self {
        Self { next_id: 0, handlers: HashMap::new() }
    }
}

impl<K: Eq + Hash, E> Dispatcher<K, E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, after any already registered.
    pub fn on(&mut self, kind: K, handler: impl FnMut(&E) + 'static) -> HandlerId {
        self.next_id += 1;
        let id = HandlerId(self.next_id);
        self.handlers.entry(kind).or_default().push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns whether it was registered.
    pub fn off(&mut self, id: HandlerId) -> bool {
        for list in self.handlers.values_mut() {
            if let Some(index) = list.iter().position(|(candidate, _)| *candidate == id) {
                drop(list.remove(index));
                return true;
            }
        }
        false
    }

    /// Run every handler for `kind`. Returns how many ran.
    pub fn dispatch(&mut self, kind: &K, event: &E) -> usize {
        let Some(list) = self.handlers.get_mut(kind) else {
            return 0;
        };
        for (_, handler) in list.iter_mut() {
            handler(event);
        }
        list.len()
    }

    /// Number of handlers registered for `kind`.
    #[must_use]
    pub fn handler_count(&self, kind: &K) -> usize {
        self.handlers.get(kind).map_or(0, Vec::len)
    }

    /// Kinds with at least one handler.
    pub fn kinds(&self) -> impl Iterator<Item = &K> {
        self.handlers
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(kind, _)| kind)
    }
}
