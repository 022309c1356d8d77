//! Page-ready trigger.

use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Run `callback` once the document structure has been parsed.
///
/// The WASM module may finish loading after `DOMContentLoaded` has already
/// fired, so a document that is no longer loading runs the callback at once.
pub fn on_dom_ready<F>(callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Failed to get document")?;
    let state = document.ready_state();
    on_ready_state(&document, &state, callback)
}

fn on_ready_state<F>(document: &Document, state: &str, callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if state != "loading" {
        callback();
        return Ok(());
    }

    let closure = Closure::once(move |_: web_sys::Event| callback());
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    // Fires once per page load; the listener is never removed.
    closure.forget();
    Ok(())
}
