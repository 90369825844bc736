//! Browser binding: wires DOM events into the core types and renders them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. [`start`] runs when the wasm
//! module is instantiated; it installs logging, reads the optional embedded
//! config, and attaches every page behavior once the DOM is parsed.
//!
//! DESIGN
//! ======
//! Page-wide `click`, `scroll`, `keydown`, and `load` events each get one DOM
//! listener that forwards into a shared [`Dispatcher`]; behaviors register on
//! the dispatcher instead of adding their own window/document listeners.
//! Element-scoped listeners (form fields, buttons, anchors) attach directly.
//! A behavior that fails to bind logs a warning and the rest still install.

mod dom;
mod form;
mod lazy;
mod lifecycle;
mod page;
mod theme;
mod toast;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Event, Window};

use crate::config::EnhanceConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::BindError;
use crate::events::{Dispatcher, EventKind, HandlerId};
use crate::form::FormPipeline;
use crate::notify::{Notifier, ToastTimings};
use crate::scheduler::{BrowserScheduler, Scheduler};

pub use theme::LocalStore;

// =============================================================================
// PAGE CONTEXT
// =============================================================================

/// Handles shared by every behavior installer.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<EnhanceConfig>,
    pub scheduler: Rc<dyn Scheduler>,
    pub notifier: Notifier,
    events: Rc<RefCell<Dispatcher<EventKind, Event>>>,
}

impl Page {
    fn new(config: EnhanceConfig) -> Result<Self, BindError> {
        let window = dom::window()?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler);
        let notifier = Notifier::new(Rc::clone(&scheduler), ToastTimings::from(&config));
        Ok(Self {
            window,
            document,
            config: Rc::new(config),
            scheduler,
            notifier,
            events: Rc::new(RefCell::new(Dispatcher::new())),
        })
    }

    /// Run `handler` for every page-level event of `kind`.
    pub fn on(&self, kind: EventKind, handler: impl FnMut(&Event) + 'static) -> HandlerId {
        self.events.borrow_mut().on(kind, handler)
    }

    fn forward(&self, kind: EventKind) -> Result<(), BindError> {
        let target: &web_sys::EventTarget = match kind {
            EventKind::Scroll | EventKind::Load => &self.window,
            EventKind::Click | EventKind::KeyDown => &self.document,
        };
        let name = match kind {
            EventKind::Click => "click",
            EventKind::Scroll => "scroll",
            EventKind::KeyDown => "keydown",
            EventKind::Load => "load",
        };
        let events = Rc::clone(&self.events);
        dom::listen(target, name, move |event| {
            events.borrow_mut().dispatch(&kind, &event);
        })
    }

    /// Attach one DOM listener per kind that has handlers.
    fn wire(&self) -> Result<(), BindError> {
        let kinds: Vec<EventKind> = self.events.borrow().kinds().copied().collect();
        for kind in kinds {
            self.forward(kind)?;
        }
        Ok(())
    }
}

// =============================================================================
// STARTUP
// =============================================================================

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {e}")));
    }
}

/// Config from `<script type="application/json" id="site-enhance-config">`,
/// or defaults when the element is absent or invalid.
fn load_config(document: &Document) -> EnhanceConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return EnhanceConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match EnhanceConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring embedded config: {e}");
            EnhanceConfig::default()
        }
    }
}

fn report(behavior: &str, result: Result<(), BindError>) {
    match result {
        Ok(()) => log::debug!("{behavior} installed"),
        Err(e) => log::warn!("{behavior} not installed: {e}"),
    }
}

/// Attach every behavior to the parsed document.
fn install_all() -> Result<(), BindError> {
    let document = dom::document()?;
    let page = Page::new(load_config(&document))?;

    report("toasts", toast::install(&page.document, &page.notifier));
    report(
        "dark mode",
        theme::install(&page.document, &page.notifier, &page.config.theme_storage_key),
    );
    report("lazy images", lazy::install(&page));
    report("smooth anchors", page::install_anchors(&page));
    report("back to top", page::install_back_to_top(&page));
    report("scroll progress", page::install_progress(&page));
    report("tab trap", page::install_tab_trap(&page));
    report("mobile menu", page::install_menu(&page));
    report("lightbox", page::install_lightbox(&page));
    report("performance", lifecycle::install_perf(&page));
    report("service worker", lifecycle::install_service_worker(&page));

    let pipeline = FormPipeline::new(Rc::clone(&page.scheduler), page.notifier.clone(), &page.config);
    match form::install(&page.document, &pipeline) {
        Ok(count) => log::debug!("forms installed: {count}"),
        Err(e) => log::warn!("forms not installed: {e}"),
    }

    page.wire()
}

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("site enhancements disabled: {e}");
            return;
        }
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let installed = dom::listen(&document, "DOMContentLoaded", |_| {
            if let Err(e) = install_all() {
                log::warn!("site enhancements failed: {e}");
            }
        });
        if let Err(e) = installed {
            log::warn!("site enhancements not scheduled: {e}");
        }
    } else if let Err(e) = install_all() {
        log::warn!("site enhancements failed: {e}");
    }
}
