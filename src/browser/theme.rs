//! Dark-mode toggle button backed by `localStorage`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Storage};

use super::dom;
use crate::error::{BindError, StoreError};
use crate::notify::{Notifier, Severity};
use crate::theme::{PreferenceStore, Theme, ThemeSettings};

/// `window.localStorage`, resolved on each access so a storage that becomes
/// unavailable mid-session degrades to in-memory behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(StoreError::Unavailable),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Io {
            key: key.to_owned(),
            message: dom::js_message(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Io {
            key: key.to_owned(),
            message: dom::js_message(&e),
        })
    }
}

fn apply(document: &Document, button: &Element, theme: Theme) {
    if let Some(root) = document.document_element() {
        dom::set_attr(&root, "data-theme", theme.as_str());
    }
    button.set_text_content(Some(theme.toggle_icon()));
}

/// Apply the stored theme and add the `.theme-toggle` button.
pub fn install(document: &Document, notifier: &Notifier, storage_key: &str) -> Result<(), BindError> {
    let settings = ThemeSettings::load(LocalStore, storage_key);
    let button = dom::append_to_body(document, "button", "theme-toggle")?;
    dom::set_attr(&button, "aria-label", "Toggle dark mode");
    apply(document, &button, settings.theme());

    let settings = Rc::new(RefCell::new(settings));
    let (document, notifier, target) = (document.clone(), notifier.clone(), button.clone());
    dom::listen(&button, "click", move |_| {
        let theme = settings.borrow_mut().toggle();
        apply(&document, &target, theme);
        notifier.show(&theme.switched_message(), Severity::Info);
    })
}
