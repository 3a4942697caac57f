//! RSVP Form WASM
//!
//! WebAssembly glue for the RSVP form: binds the validation rules from
//! `rsvp-validation` to the DOM, renders inline errors, simulates the
//! submission, and installs smooth scrolling for in-page anchor links.
//!
//! The module wires itself up on instantiation; pages that inject the form
//! later can call `initRsvpForm()` again from JavaScript.

mod anchors;
mod controller;

pub use controller::{FormController, SubmissionPayload};

use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Style rule injected into the document head for error highlighting
const ERROR_STYLE_RULE: &str = "
    .form-group input.error,
    .form-group select.error,
    .form-group textarea.error {
        border-color: var(--secondary-color);
    }
";

/// Set panic hook for better error messages in the browser, then bind the
/// form if it is already present
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_rsvp_form()
}

/// Bind the RSVP form controller to the current document
///
/// Silently does nothing when `#rsvpForm` or `#formSuccess` is missing;
/// their absence is a page-integration problem, not a runtime error.
#[wasm_bindgen(js_name = initRsvpForm)]
pub fn init_rsvp_form() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    if FormController::attach(&document)?.is_none() {
        return Ok(());
    }

    anchors::install(&document)?;
    inject_error_style(&document)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    rsvp_validation::is_valid_email(email)
}

fn inject_error_style(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(ERROR_STYLE_RULE));

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&style)?;

    Ok(())
}
