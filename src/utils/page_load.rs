use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::ThemeError;

/// Runs `callback` once the page has finished loading.
///
/// When the document is already complete the callback runs immediately,
/// otherwise it is attached to the window `load` event.
pub fn when_page_loaded<F>(callback: F) -> Result<(), ThemeError> where F: FnOnce() + 'static {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;

    if document.ready_state() == "complete" {
        log::debug!("Document already loaded, running immediately");
        callback();
        return Ok(());
    }

    let listener = Closure::once(callback);
    window.add_event_listener_with_callback("load", listener.as_ref().unchecked_ref())?;
    // The listener has to outlive this call; the page owns it from here on.
    listener.forget();
    log::debug!("Waiting for window load event");
    Ok(())
}
