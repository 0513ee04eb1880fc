//! DOM and Web API utility functions.

use wasm_bindgen::JsCast;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Toggle page scrolling, used while the detail modal is open.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let overflow = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// Write a diagnostic to the browser console.
pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Write a warning to the browser console.
pub fn log_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
