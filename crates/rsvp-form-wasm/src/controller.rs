//! Form controller: event wiring, error rendering, simulated submission

use rsvp_validation::{evaluate, FieldRules};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Marker class for a field that failed its last validation pass
const ERROR_CLASS: &str = "error";

/// Class that makes the success container visible
const SHOW_CLASS: &str = "show";

/// How long the success message stays visible
const SUCCESS_HIDE_MS: i32 = 10_000;

/// The three fields validated on every submit attempt
const REQUIRED_FIELD_IDS: [&str; 3] = ["name", "email", "guests"];

/// Snapshot of the form values taken at submit time
///
/// Logged to the console in place of a network call and then discarded.
#[derive(Serialize, Debug)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub guests: String,
    pub message: String,
}

/// Controller for the RSVP form
///
/// Holds the form and its success container and owns all validation and
/// rendering against them. Cloning is cheap (JS object handles), which is
/// how the controller moves into its event-listener closures.
#[derive(Clone)]
pub struct FormController {
    document: Document,
    form: HtmlFormElement,
    success: HtmlElement,
}

impl FormController {
    /// Locate `#rsvpForm` and `#formSuccess` and wire up all listeners
    ///
    /// Returns `Ok(None)` when either element is absent.
    pub fn attach(document: &Document) -> Result<Option<Self>, JsValue> {
        let Some(form) = document.get_element_by_id("rsvpForm") else {
            return Ok(None);
        };
        let Some(success) = document.get_element_by_id("formSuccess") else {
            return Ok(None);
        };

        let form: HtmlFormElement = form
            .dyn_into()
            .map_err(|_| JsValue::from_str("#rsvpForm is not a <form>"))?;
        let success: HtmlElement = success
            .dyn_into()
            .map_err(|_| JsValue::from_str("#formSuccess is not an HTML element"))?;

        let controller = Self {
            document: document.clone(),
            form,
            success,
        };
        controller.bind()?;

        Ok(Some(controller))
    }

    /// Attach the submit listener and the per-field live-feedback listeners
    fn bind(&self) -> Result<(), JsValue> {
        {
            let controller = self.clone();
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                event.prevent_default();
                if let Err(err) = controller.handle_submit() {
                    console::error_2(&"RSVP submit failed:".into(), &err);
                }
            }) as Box<dyn FnMut(_)>);
            self.form
                .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        let fields = self.form.query_selector_all("input, select, textarea")?;
        for i in 0..fields.length() {
            let Some(field) = fields.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };

            // Validate on blur
            {
                let controller = self.clone();
                let target = field.clone();
                let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                    if let Err(err) = controller.validate_field(&target) {
                        console::error_2(&"RSVP field validation failed:".into(), &err);
                    }
                }) as Box<dyn FnMut(_)>);
                field.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }

            // Re-validate on input, but only while the field is marked
            // erroneous, so the error clears as soon as the user fixes it
            {
                let controller = self.clone();
                let target = field.clone();
                let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                    if !target.class_list().contains(ERROR_CLASS) {
                        return;
                    }
                    if let Err(err) = controller.validate_field(&target) {
                        console::error_2(&"RSVP field validation failed:".into(), &err);
                    }
                }) as Box<dyn FnMut(_)>);
                field.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
        }

        Ok(())
    }

    fn handle_submit(&self) -> Result<(), JsValue> {
        self.clear_errors()?;
        if self.validate_form()? {
            self.submit_form()?;
        }
        Ok(())
    }

    /// Validate one field and render the outcome
    ///
    /// Clears the previous error marker, evaluates the field's rules, and
    /// either sets the sibling `#<id>-error` element's text (marking it
    /// `aria-live="polite"` for screen readers) or clears it. A missing
    /// error element degrades to class toggling only.
    pub fn validate_field(&self, field: &Element) -> Result<bool, JsValue> {
        let id = field.id();
        let error_element = self.document.get_element_by_id(&format!("{id}-error"));

        field.class_list().remove_1(ERROR_CLASS)?;

        let result = evaluate(&field_value(field), &rules_for(field, &id));

        if !result.valid {
            field.class_list().add_1(ERROR_CLASS)?;
            if let Some(error_element) = &error_element {
                error_element.set_text_content(Some(result.message));
                error_element.set_attribute("aria-live", "polite")?;
            }
        } else if let Some(error_element) = &error_element {
            error_element.set_text_content(Some(""));
        }

        Ok(result.valid)
    }

    /// Validate the name, email, and guests fields
    ///
    /// All three are always evaluated, with no short-circuiting, so each
    /// one updates its own error display on every pass.
    pub fn validate_form(&self) -> Result<bool, JsValue> {
        let mut valid = true;
        for id in REQUIRED_FIELD_IDS {
            if !self.validate_field(&self.field(id)?)? {
                valid = false;
            }
        }
        Ok(valid)
    }

    /// Clear all error text and error markers under the form
    pub fn clear_errors(&self) -> Result<(), JsValue> {
        let messages = self.form.query_selector_all(".error-message")?;
        for i in 0..messages.length() {
            if let Some(message) = messages.item(i) {
                message.set_text_content(Some(""));
            }
        }

        let marked = self.form.query_selector_all(".error")?;
        for i in 0..marked.length() {
            if let Some(field) = marked.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                field.class_list().remove_1(ERROR_CLASS)?;
            }
        }

        Ok(())
    }

    /// Simulate a successful submission
    ///
    /// Logs the payload, shows the personalized success message, resets the
    /// form, scrolls the message into view, schedules it to hide again, and
    /// moves focus to it for assistive technology.
    pub fn submit_form(&self) -> Result<(), JsValue> {
        let payload = SubmissionPayload {
            name: self.trimmed_value("name")?,
            email: self.trimmed_value("email")?,
            guests: field_value(&self.field("guests")?),
            message: self.trimmed_value("message")?,
        };

        // Stands in for the network call a real deployment would make
        console::log_2(
            &"Form submitted:".into(),
            &serde_wasm_bindgen::to_value(&payload)?,
        );

        self.success.set_text_content(Some(&format!(
            "Thank you, {}! Your RSVP has been received. \
             We're looking forward to seeing you at the event!",
            payload.name
        )));
        self.success.class_list().add_1(SHOW_CLASS)?;

        self.form.reset();

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        self.success
            .scroll_into_view_with_scroll_into_view_options(&options);

        self.schedule_success_hide()?;

        self.success.focus()?;

        Ok(())
    }

    /// Hide the success message after [`SUCCESS_HIDE_MS`]
    ///
    /// The timer is not cancelled by a later submission; an earlier timer
    /// firing simply re-hides a message the user has already seen.
    fn schedule_success_hide(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let success = self.success.clone();
        let hide = Closure::once_into_js(move || {
            let _ = success.class_list().remove_1(SHOW_CLASS);
        });
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.unchecked_ref(),
            SUCCESS_HIDE_MS,
        )?;
        Ok(())
    }

    fn field(&self, id: &str) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form field #{id}")))
    }

    fn trimmed_value(&self, id: &str) -> Result<String, JsValue> {
        Ok(field_value(&self.field(id)?).trim().to_string())
    }
}

/// Build the rules for a field from its markup
fn rules_for(field: &Element, id: &str) -> FieldRules {
    if id == "name" {
        return FieldRules {
            required: field.has_attribute("required"),
            ..FieldRules::name()
        };
    }
    FieldRules {
        required: field.has_attribute("required"),
        email: field.get_attribute("type").as_deref() == Some("email"),
        length: None,
    }
}

/// Current value of an input, select, or textarea
fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}
