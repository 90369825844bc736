//! Binds every `<form>` on the page to a [`FormPipeline`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

use super::dom;
use crate::error::BindError;
use crate::form::{
    Field, FieldKind, Form, FormHandle, FormPipeline, FormView, MessageSlots, SubmitControl,
};

const FIELD_SELECTOR: &str = "input, textarea";
const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;
const ERROR_CLASS: &str = "error";
const ERROR_MESSAGE_CLASS: &str = "error-message";

// =============================================================================
// DOM ACCESS
// =============================================================================

fn read_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn write_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        if input.value() != value {
            input.set_value(value);
        }
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        if area.value() != value {
            area.set_value(value);
        }
    }
}

/// Textareas and text-entry inputs; hidden values, buttons, and toggles keep
/// their own state.
fn is_tracked(element: &Element) -> bool {
    element.dyn_ref::<HtmlTextAreaElement>().is_some()
        || FieldKind::is_text_entry(&element.get_attribute("type").unwrap_or_default())
}

fn describe_field(index: usize, element: &Element) -> Field {
    let name = element
        .get_attribute("name")
        .or_else(|| element.get_attribute("id"))
        .unwrap_or_else(|| format!("field-{index}"));
    let kind = if element.dyn_ref::<HtmlTextAreaElement>().is_some() {
        FieldKind::Other
    } else {
        FieldKind::from_input_type(&element.get_attribute("type").unwrap_or_default())
    };
    Field::new(name, kind)
        .required(element.has_attribute("required"))
        .with_value(read_value(element))
}

// =============================================================================
// VIEW
// =============================================================================

/// Patches field values, error messages, and the submit button.
struct DomFormView {
    document: Document,
    inputs: Vec<Element>,
    messages: RefCell<MessageSlots<Element>>,
    button: Option<HtmlButtonElement>,
}

impl DomFormView {
    /// Insert a `div.error-message` right after `input`.
    fn show_message(&self, input: &Element, text: &str) -> Result<Element, BindError> {
        let message = self.document.create_element("div").map_err(dom::dom_err("createElement"))?;
        message.set_class_name(ERROR_MESSAGE_CLASS);
        message.set_text_content(Some(text));
        input.after_with_node_1(&message).map_err(dom::dom_err("after"))?;
        Ok(message)
    }
}

impl FormView for DomFormView {
    fn field_changed(&self, index: usize, field: &Field) {
        let Some(input) = self.inputs.get(index) else {
            return;
        };
        write_value(input, field.value());
        if let Some(previous) = self.messages.borrow_mut().take(index) {
            previous.remove();
        }
        dom::set_class(input, ERROR_CLASS, field.is_errored());
        let Some(error) = field.error() else {
            return;
        };
        match self.show_message(input, &error.to_string()) {
            Ok(message) => {
                if let Some(stale) = self.messages.borrow_mut().put(index, message) {
                    stale.remove();
                }
            }
            Err(e) => log::warn!("field `{}` error not shown: {e}", field.name),
        }
    }

    fn control_changed(&self, control: &SubmitControl) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(control.label()));
            button.set_disabled(control.is_disabled());
        }
    }
}

// =============================================================================
// INSTALL
// =============================================================================

fn bind_form(document: &Document, pipeline: &FormPipeline, element: &Element) -> Result<(), BindError> {
    let inputs: Vec<Element> =
        dom::query_all(element, FIELD_SELECTOR)?.into_iter().filter(is_tracked).collect();
    let button = element
        .query_selector(SUBMIT_SELECTOR)
        .map_err(dom::dom_err("querySelector"))?
        .and_then(|button| button.dyn_ref::<HtmlButtonElement>().cloned());

    let label = button.as_ref().and_then(|b| b.text_content()).unwrap_or_default();
    let fields = inputs.iter().enumerate().map(|(i, el)| describe_field(i, el)).collect();
    let form = Form::new(fields, SubmitControl::new(label));

    let view = DomFormView {
        document: document.clone(),
        inputs: inputs.clone(),
        messages: RefCell::new(MessageSlots::new()),
        button: button.clone(),
    };
    let handle = FormHandle::new(form, Rc::new(view));

    for (index, input) in inputs.into_iter().enumerate() {
        let (blur_pipeline, blur_handle) = (pipeline.clone(), handle.clone());
        dom::listen(&input, "blur", move |_| {
            blur_pipeline.on_blur(&blur_handle, index);
        })?;

        let (input_pipeline, input_handle) = (pipeline.clone(), handle.clone());
        let source = input.clone();
        dom::listen(&input, "input", move |_| {
            input_pipeline.on_input(&input_handle, index, &read_value(&source));
        })?;
    }

    let submit_pipeline = pipeline.clone();
    dom::listen(element, "submit", move |event| {
        event.prevent_default();
        if let Some(label) = button.as_ref().and_then(|b| b.text_content()) {
            handle.refresh_label(&label);
        }
        if let Err(e) = submit_pipeline.handle_submit(&handle) {
            log::debug!("submit not started: {e}");
        }
    })?;
    Ok(())
}

/// Attach validation and submission handling to every form in the document.
pub fn install(document: &Document, pipeline: &FormPipeline) -> Result<usize, BindError> {
    let forms = dom::query_document(document, "form")?;
    for form in &forms {
        bind_form(document, pipeline, form)?;
    }
    Ok(forms.len())
}
