//! Page life-cycle signals.
//!
//! The wasm module is instantiated asynchronously, so by the time we run the
//! browser may already have fired `DOMContentLoaded` or even `load`. Both
//! helpers check `document.readyState` first and run the callback right away
//! when the signal is already in the past.

use web_sys::{Document, Window};

use crate::dom;
use crate::error::SetupError;

pub fn on_dom_ready<F>(document: &Document, f: F) -> Result<(), SetupError>
where
    F: FnOnce() + 'static,
{
    match document.ready_state().as_str() {
        "loading" => dom::listen_once(document, "DOMContentLoaded", f),
        _ => {
            f();
            Ok(())
        }
    }
}

pub fn on_load<F>(window: &Window, document: &Document, f: F) -> Result<(), SetupError>
where
    F: FnOnce() + 'static,
{
    match document.ready_state().as_str() {
        "complete" => {
            f();
            Ok(())
        }
        _ => dom::listen_once(window, "load", f),
    }
}
