//! Thin helpers over `web-sys` shared by the page bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::BindError;

pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoDocument)
}

pub fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::NoDocument)
}

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Map a thrown JS value into [`BindError::Dom`] tagged with the failing call.
pub fn dom_err(call: &'static str) -> impl FnOnce(JsValue) -> BindError {
    move |value| BindError::Dom { call, message: js_message(&value) }
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = root.query_selector_all(selector).map_err(dom_err("querySelectorAll"))?;
    Ok(collect(&list))
}

/// Every element in the document matching `selector`.
pub fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = document.query_selector_all(selector).map_err(dom_err("querySelectorAll"))?;
    Ok(collect(&list))
}

fn collect(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Create `<tag class="class">` and append it to `<body>`.
pub fn append_to_body(document: &Document, tag: &str, class: &str) -> Result<Element, BindError> {
    let body = document.body().ok_or_else(|| BindError::Missing("body".to_owned()))?;
    let element = document.create_element(tag).map_err(dom_err("createElement"))?;
    element.set_class_name(class);
    body.append_child(&element).map_err(dom_err("appendChild"))?;
    Ok(element)
}

/// Add or remove `class` on `element`, logging a DOM failure.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("classList.toggle({class}) failed: {}", js_message(&e));
    }
}

/// Set an attribute, logging a DOM failure.
pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        log::warn!("setAttribute({name}) failed: {}", js_message(&e));
    }
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), BindError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_err("addEventListener"))?;
    closure.forget();
    Ok(())
}

/// The event target as an element, when it is one.
pub fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_ref::<Element>().cloned())
}
