//! # Browser DOM document
//!
//! [`WebDocument`] is the [`Document`] used in the browser build. It looks each
//! element up by id on every call through `web-sys` and holds no element
//! handles.
//!
//! `display` reads and writes the element's inline style only, which is what
//! the page markup uses to hide blog bodies and the comment form.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::document::{Document, DomError};

#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// The document of the current window, if there is one.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// The page origin, e.g. `https://example.com`.
    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    fn element(&self, id: &str) -> Result<Element, DomError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, DomError> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::NotStylable(id.to_string()))
    }
}

fn js_error(err: JsValue) -> DomError {
    DomError::Js(format!("{err:?}"))
}

impl Document for WebDocument {
    fn set_text(&self, id: &str, text: &str) -> Result<(), DomError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), DomError> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn display(&self, id: &str) -> Result<String, DomError> {
        self.html_element(id)?
            .style()
            .get_property_value("display")
            .map_err(js_error)
    }

    fn set_display(&self, id: &str, display: &str) -> Result<(), DomError> {
        self.html_element(id)?
            .style()
            .set_property("display", display)
            .map_err(js_error)
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), DomError> {
        self.element(id)?.set_attribute(name, value).map_err(js_error)
    }

    fn set_disabled(&self, id: &str, disabled: bool) -> Result<(), DomError> {
        let element = self.element(id)?;
        if disabled {
            element.set_attribute("disabled", "").map_err(js_error)
        } else {
            element.remove_attribute("disabled").map_err(js_error)
        }
    }

    fn value(&self, id: &str) -> Result<String, DomError> {
        let element = self.element(id)?;
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Ok(select.value());
        }
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        Err(DomError::NoValue(id.to_string()))
    }
}
