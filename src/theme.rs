//! Dark/light display preference with persistence.
//!
//! `ThemeSettings::load` reads the stored preference once; `toggle` and `set`
//! write through to the store on every change. Storage failures are logged
//! and the in-memory preference still changes, so the page keeps working with
//! storage disabled.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in preferences and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values are `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button: the mode a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Toast text announcing a switch to this theme.
    #[must_use]
    pub fn switched_message(self) -> String {
        format!("Switched to {} mode", self.as_str())
    }
}

/// Key/value preference storage (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and for pages without storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct ThemeSettings<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeSettings<S> {
    /// Initialize from storage, falling back to light mode when nothing
    /// (or nothing recognizable) is stored.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = match store.get(&key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("ignoring unknown stored theme {raw:?}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("theme preference unavailable: {e}");
                Theme::default()
            }
        };
        Self { store, key, theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Set and persist `theme`.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("failed to persist theme: {e}");
        }
        log::debug!("theme set to {}", theme.as_str());
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
