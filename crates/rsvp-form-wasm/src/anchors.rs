//! Smooth scrolling for in-page anchor links

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Intercept clicks on every `a[href^="#"]` link
///
/// A fragment link scrolls its target into view smoothly instead of
/// jumping. The bare `"#"` link keeps its default behavior, and a fragment
/// with no matching element still has its navigation suppressed.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all("a[href^=\"#\"]")?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let document = document.clone();
        let link = anchor.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }

            event.prevent_default();

            if let Ok(Some(target)) = document.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(_)>);
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
