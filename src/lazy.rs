//! Deferred image loading.
//!
//! DESIGN
//! ======
//! Images are registered by an opaque key (the binding uses its own index
//! into the observed `img[data-src]` list). An intersection report for a key
//! yields the source to swap in exactly once; later reports for the same key
//! are ignored so a re-entering image is never reloaded.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use std::collections::HashMap;

/// What the binding should do with an image that just became visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadAction {
    pub key: usize,
    pub src: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot {
    Waiting(String),
    Loaded,
}

/// Tracks which deferred images are still waiting to load.
#[derive(Debug, Default)]
pub struct LazyLoader {
    slots: HashMap<usize, Slot>,
}

impl LazyLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image with its deferred source. Blank sources are not
    /// tracked; re-registering a loaded key is ignored.
    pub fn register(&mut self, key: usize, data_src: &str) -> bool {
        let src = data_src.trim();
        if src.is_empty() || matches!(self.slots.get(&key), Some(Slot::Loaded)) {
            return false;
        }
        self.slots.insert(key, Slot::Waiting(src.to_owned()));
        true
    }

    /// An intersection report arrived for `key`.
    pub fn intersect(&mut self, key: usize, is_intersecting: bool) -> Option<LoadAction> {
        if !is_intersecting {
            return None;
        }
        let slot = self.slots.get_mut(&key)?;
        match std::mem::replace(slot, Slot::Loaded) {
            Slot::Waiting(src) => {
                log::debug!("lazy: loading image {key}");
                Some(LoadAction { key, src })
            }
            Slot::Loaded => None,
        }
    }

    /// Images registered but not yet loaded.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.slots.values().filter(|slot| matches!(slot, Slot::Waiting(_))).count()
    }

    #[must_use]
    pub fn is_loaded(&self, key: usize) -> bool {
        matches!(self.slots.get(&key), Some(Slot::Loaded))
    }
}
