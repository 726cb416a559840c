use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error::{js_message, SetupError};

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, SetupError> {
    document
        .query_selector(selector)
        .map_err(|_| SetupError::InvalidSelector(selector.to_string()))
}

pub fn require(document: &Document, selector: &str) -> Result<Element, SetupError> {
    query(document, selector)?.ok_or_else(|| SetupError::MissingElement(selector.to_string()))
}

pub fn require_html(document: &Document, selector: &str) -> Result<HtmlElement, SetupError> {
    require(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::WrongElementType(selector.to_string()))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| SetupError::InvalidSelector(selector.to_string()))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Registers `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| SetupError::listener(event, e))?;
    callback.forget();
    Ok(())
}

/// Registers a handler that runs at most once; the closure is released by
/// wasm-bindgen after the first call.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(handler);
    target
        .add_event_listener_with_callback(event, callback.unchecked_ref())
        .map_err(|e| SetupError::listener(event, e))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::error!("Failed to set {}: {}: {}", property, value, js_message(&e));
    }
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, present) {
        log::error!("Failed to toggle class '{}': {}", class, js_message(&e));
    }
}
