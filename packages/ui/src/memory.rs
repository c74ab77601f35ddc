use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use crate::document::{Document, DomError};
use crate::render::escape_html;

/// Snapshot of one element in a [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryElement {
    /// Last text written with `set_text`, empty after `set_inner_html`.
    pub text: String,
    /// Current markup. `set_text` stores the escaped text here too.
    pub html: String,
    pub display: String,
    pub attributes: BTreeMap<String, String>,
    pub disabled: bool,
    pub value: Option<String>,
}

/// In-memory Document for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Arc<Mutex<HashMap<String, MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document containing an empty element for each id.
    pub fn with_elements(ids: &[&str]) -> Self {
        let doc = Self::new();
        for id in ids {
            doc.insert(id, MemoryElement::default());
        }
        doc
    }

    pub fn insert(&self, id: &str, element: MemoryElement) {
        self.elements.lock().unwrap().insert(id.to_string(), element);
    }

    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        self.elements.lock().unwrap().get(id).cloned()
    }

    /// Simulate the visitor picking a value in a form control.
    pub fn set_value(&self, id: &str, value: &str) -> Result<(), DomError> {
        self.update(id, |el| el.value = Some(value.to_string()))
    }

    fn update(&self, id: &str, f: impl FnOnce(&mut MemoryElement)) -> Result<(), DomError> {
        let mut elements = self.elements.lock().unwrap();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
        f(element);
        Ok(())
    }

    fn read<T>(&self, id: &str, f: impl FnOnce(&MemoryElement) -> T) -> Result<T, DomError> {
        let elements = self.elements.lock().unwrap();
        elements
            .get(id)
            .map(f)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }
}

impl Document for MemoryDocument {
    fn set_text(&self, id: &str, text: &str) -> Result<(), DomError> {
        self.update(id, |el| {
            el.text = text.to_string();
            el.html = escape_html(text);
        })
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), DomError> {
        self.update(id, |el| {
            el.text.clear();
            el.html = html.to_string();
        })
    }

    fn display(&self, id: &str) -> Result<String, DomError> {
        self.read(id, |el| el.display.clone())
    }

    fn set_display(&self, id: &str, display: &str) -> Result<(), DomError> {
        self.update(id, |el| el.display = display.to_string())
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), DomError> {
        self.update(id, |el| {
            el.attributes.insert(name.to_string(), value.to_string());
        })
    }

    fn set_disabled(&self, id: &str, disabled: bool) -> Result<(), DomError> {
        self.update(id, |el| el.disabled = disabled)
    }

    fn value(&self, id: &str) -> Result<String, DomError> {
        self.read(id, |el| el.value.clone())?
            .ok_or_else(|| DomError::NoValue(id.to_string()))
    }
}
