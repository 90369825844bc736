//! Per-field ownership of rendered error messages.
//!
//! A view keeps the node it created for each field here, so clearing one
//! field's message never touches a sibling's, even when several fields share
//! a parent element.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageSlots<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for MessageSlots<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> MessageSlots<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Detach the message shown for `index`, if any, for the caller to remove.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Record the message now shown for `index`. Returns the one it replaces.
    pub fn put(&mut self, index: usize, message: T) -> Option<T> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(message)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of fields currently showing a message.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
