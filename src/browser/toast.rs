//! Mirrors [`Notifier`] toasts into a `.toast-container` element.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::dom;
use crate::error::BindError;
use crate::notify::{Notifier, Toast, ToastId, ToastPhase, ToastRenderer};

pub struct DomToastRenderer {
    document: Document,
    container: Element,
    mounted: RefCell<HashMap<ToastId, Element>>,
}

impl DomToastRenderer {
    pub fn new(document: Document) -> Result<Self, BindError> {
        let container = dom::append_to_body(&document, "div", "toast-container")?;
        Ok(Self { document, container, mounted: RefCell::new(HashMap::new()) })
    }
}

impl ToastRenderer for DomToastRenderer {
    fn mount(&self, toast: &Toast) {
        let element = match self.document.create_element("div") {
            Ok(element) => element,
            Err(e) => {
                log::warn!("toast element not created: {}", dom::js_message(&e));
                return;
            }
        };
        element.set_class_name(&format!("toast toast-{}", toast.severity.as_str()));
        element.set_text_content(Some(&toast.message));
        if let Err(e) = self.container.append_child(&element) {
            log::warn!("toast not mounted: {}", dom::js_message(&e));
            return;
        }
        self.mounted.borrow_mut().insert(toast.id, element);
    }

    fn phase_changed(&self, toast: &Toast) {
        if let Some(element) = self.mounted.borrow().get(&toast.id) {
            dom::set_class(element, "show", toast.phase == ToastPhase::Visible);
        }
    }

    fn remove(&self, id: ToastId) {
        if let Some(element) = self.mounted.borrow_mut().remove(&id) {
            element.remove();
        }
    }
}

/// Create the toast container and attach it to `notifier`.
pub fn install(document: &Document, notifier: &Notifier) -> Result<(), BindError> {
    let renderer = DomToastRenderer::new(document.clone())?;
    notifier.set_renderer(Rc::new(renderer));
    Ok(())
}
