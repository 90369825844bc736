//! Scroll, keyboard, menu, and lightbox behaviors.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent, ScrollBehavior, ScrollToOptions,
    Window,
};

use super::Page;
use super::dom;
use crate::a11y::tab_wrap_target;
use crate::consts::FOCUSABLE_SELECTOR;
use crate::error::BindError;
use crate::events::EventKind;
use crate::lightbox::{Lightbox, LightboxClick};
use crate::menu::MenuState;
use crate::scroll::{BackToTop, FrameGate, anchor_target_top, fragment_id, progress_percent};

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// Run `update` on the next animation frame, at most once per burst.
fn on_frame(window: &Window, gate: &Rc<Cell<FrameGate>>, update: Rc<dyn Fn()>) {
    let mut state = gate.get();
    let requested = state.request();
    gate.set(state);
    if !requested {
        return;
    }
    let gate_for_cb = Rc::clone(gate);
    let callback = Closure::once_into_js(move || {
        update();
        let mut state = gate_for_cb.get();
        state.complete();
        gate_for_cb.set(state);
    });
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {}", dom::js_message(&e));
        let mut state = gate.get();
        state.complete();
        gate.set(state);
    }
}

// =============================================================================
// SCROLLING
// =============================================================================

/// `a[href^="#"]` links scroll smoothly to their target, leaving room for the
/// sticky header.
pub fn install_anchors(page: &Page) -> Result<(), BindError> {
    let offset = page.config.anchor_scroll_offset_px;
    for anchor in dom::query_document(&page.document, r##"a[href^="#"]"##)? {
        let (window, document, link) = (page.window.clone(), page.document.clone(), anchor.clone());
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            let top = target.dyn_ref::<HtmlElement>().map_or(0, HtmlElement::offset_top);
            smooth_scroll_to(&window, anchor_target_top(f64::from(top), offset));
        })?;
    }
    Ok(())
}

/// A `.back-to-top` button shown once the page is scrolled past the threshold.
pub fn install_back_to_top(page: &Page) -> Result<(), BindError> {
    let button = dom::append_to_body(&page.document, "button", "back-to-top")?;
    button.set_text_content(Some("↑"));
    dom::set_attr(&button, "aria-label", "Back to top");

    let window = page.window.clone();
    dom::listen(&button, "click", move |_| smooth_scroll_to(&window, 0.0))?;

    let tracker = Rc::new(RefCell::new(BackToTop::new(page.config.back_to_top_threshold_px)));
    let gate = Rc::new(Cell::new(FrameGate::default()));
    let window = page.window.clone();
    let update: Rc<dyn Fn()> = {
        let window = window.clone();
        Rc::new(move || {
            if let Some(visible) = tracker.borrow_mut().update(scroll_y(&window)) {
                dom::set_class(&button, "visible", visible);
            }
        })
    };
    page.on(EventKind::Scroll, move |_| on_frame(&window, &gate, Rc::clone(&update)));
    Ok(())
}

/// A `.scroll-progress` bar whose width tracks reading progress.
pub fn install_progress(page: &Page) -> Result<(), BindError> {
    let bar = dom::append_to_body(&page.document, "div", "scroll-progress")?;
    let bar = bar
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindError::Missing("scroll-progress element".to_owned()))?;

    let gate = Rc::new(Cell::new(FrameGate::default()));
    let (window, document) = (page.window.clone(), page.document.clone());
    let update: Rc<dyn Fn()> = {
        let window = window.clone();
        Rc::new(move || {
            let Some(root) = document.document_element() else {
                return;
            };
            let viewport = window.inner_height().map_or(0.0, |h| h.as_f64().unwrap_or_default());
            let percent = progress_percent(scroll_y(&window), f64::from(root.scroll_height()), viewport);
            if let Err(e) = bar.style().set_property("width", &format!("{percent}%")) {
                log::warn!("progress width not set: {}", dom::js_message(&e));
            }
        })
    };
    page.on(EventKind::Scroll, move |_| on_frame(&window, &gate, Rc::clone(&update)));
    Ok(())
}

// =============================================================================
// KEYBOARD
// =============================================================================

/// Tab on the last focusable element wraps focus to the first.
pub fn install_tab_trap(page: &Page) -> Result<(), BindError> {
    let document = page.document.clone();
    page.on(EventKind::KeyDown, move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let focusable = match dom::query_document(&document, FOCUSABLE_SELECTOR) {
            Ok(focusable) => focusable,
            Err(e) => {
                log::warn!("tab trap: {e}");
                return;
            }
        };
        let active = document
            .active_element()
            .and_then(|active| focusable.iter().position(|el| *el == active));
        if tab_wrap_target(&key.key(), key.shift_key(), active, focusable.len()).is_none() {
            return;
        }
        if let Some(first) = focusable.first().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            event.prevent_default();
            if let Err(e) = first.focus() {
                log::warn!("focus failed: {}", dom::js_message(&e));
            }
        }
    });
    Ok(())
}

// =============================================================================
// MENU
// =============================================================================

fn contains(container: &Element, event: &Event) -> bool {
    let target = event.target().and_then(|t| t.dyn_ref::<web_sys::Node>().cloned());
    container.contains(target.as_ref())
}

/// `.menu-toggle` flips `.main-nav.open`; outside clicks and Escape close it.
pub fn install_menu(page: &Page) -> Result<(), BindError> {
    let find = |selector: &str| -> Result<Element, BindError> {
        page.document
            .query_selector(selector)
            .map_err(dom::dom_err("querySelector"))?
            .ok_or_else(|| BindError::Missing(selector.to_owned()))
    };
    let nav = find(".main-nav")?;
    let toggle = find(".menu-toggle")?;
    let menu = Rc::new(Cell::new(MenuState::default()));

    let (state, target) = (Rc::clone(&menu), nav.clone());
    dom::listen(&toggle, "click", move |_| {
        let mut current = state.get();
        dom::set_class(&target, "open", current.toggle());
        state.set(current);
    })?;

    let (state, target) = (Rc::clone(&menu), nav.clone());
    page.on(EventKind::Click, move |event| {
        let mut current = state.get();
        if current.click(contains(&target, event), contains(&toggle, event)) {
            dom::set_class(&target, "open", false);
        }
        state.set(current);
    });

    page.on(EventKind::KeyDown, move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let mut current = menu.get();
        if current.key(&key.key()) {
            dom::set_class(&nav, "open", false);
        }
        menu.set(current);
    });
    Ok(())
}

// =============================================================================
// LIGHTBOX
// =============================================================================

struct LightboxView {
    state: Lightbox,
    overlay: Option<Element>,
}

fn build_overlay(page: &Page, src: &str, alt: &str) -> Result<Element, BindError> {
    let document = &page.document;
    let overlay = dom::append_to_body(document, "div", "lightbox")?;
    let content = document.create_element("div").map_err(dom::dom_err("createElement"))?;
    content.set_class_name("lightbox-content");
    let close = document.create_element("span").map_err(dom::dom_err("createElement"))?;
    close.set_class_name("lightbox-close");
    close.set_text_content(Some("×"));
    let image = document.create_element("img").map_err(dom::dom_err("createElement"))?;
    dom::set_attr(&image, "src", src);
    dom::set_attr(&image, "alt", alt);
    content.append_child(&close).map_err(dom::dom_err("appendChild"))?;
    content.append_child(&image).map_err(dom::dom_err("appendChild"))?;
    overlay.append_child(&content).map_err(dom::dom_err("appendChild"))?;
    Ok(overlay)
}

fn open(page: &Page, view: &RefCell<LightboxView>, item: &Element) -> Result<(), BindError> {
    let image = item
        .query_selector("img")
        .map_err(dom::dom_err("querySelector"))?
        .and_then(|img| img.dyn_ref::<HtmlImageElement>().cloned())
        .ok_or_else(|| BindError::Missing(".gallery-item img".to_owned()))?;
    let mut view = view.borrow_mut();
    let Some(shown) = view.state.open(&image.src(), &image.alt()).cloned() else {
        return Ok(());
    };
    if let Some(previous) = view.overlay.take() {
        previous.remove();
    }
    view.overlay = Some(build_overlay(page, &shown.src, &shown.alt)?);
    Ok(())
}

fn classify(overlay: &Element, event: &Event) -> Option<LightboxClick> {
    let target = dom::target_element(event)?;
    if target == *overlay {
        return Some(LightboxClick::Backdrop);
    }
    if target.class_list().contains("lightbox-close") {
        return Some(LightboxClick::CloseButton);
    }
    contains(overlay, event).then_some(LightboxClick::Content)
}

/// `.gallery-item` clicks open their image in a `.lightbox` overlay.
pub fn install_lightbox(page: &Page) -> Result<(), BindError> {
    let view = Rc::new(RefCell::new(LightboxView { state: Lightbox::new(), overlay: None }));

    for item in dom::query_document(&page.document, ".gallery-item")? {
        let (page_for_cb, view, source) = (page.clone(), Rc::clone(&view), item.clone());
        dom::listen(&item, "click", move |_| {
            if let Err(e) = open(&page_for_cb, &view, &source) {
                log::warn!("lightbox not opened: {e}");
            }
        })?;
    }

    page.on(EventKind::Click, move |event| {
        let mut view = view.borrow_mut();
        let Some(overlay) = view.overlay.clone() else {
            return;
        };
        let Some(click) = classify(&overlay, event) else {
            return;
        };
        if view.state.click(click) {
            overlay.remove();
            view.overlay = None;
        }
    });
    Ok(())
}
