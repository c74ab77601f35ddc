//! # The [`Document`] trait: the page as seen by the controller
//!
//! The controller never reaches for `window.document` itself. It is handed a
//! [`Document`] and addresses elements by id through it:
//!
//! - [`crate::WebDocument`] wraps the live browser DOM (WASM + `web` feature).
//! - [`crate::MemoryDocument`] keeps elements in a map, for tests.
//!
//! Each method fails with [`DomError::MissingElement`] when the id is not on
//! the page.

use thiserror::Error;

/// Value of `style.display` for a hidden element.
pub const DISPLAY_NONE: &str = "none";
/// Value of `style.display` for a shown block element.
pub const DISPLAY_BLOCK: &str = "block";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("element `{0}` has no style")]
    NotStylable(String),

    #[error("element `{0}` has no value")]
    NoValue(String),

    #[error("DOM call failed: {0}")]
    Js(String),
}

/// Element-by-id access to the page.
pub trait Document {
    /// Replace the element's content with plain text.
    fn set_text(&self, id: &str, text: &str) -> Result<(), DomError>;

    /// Replace the element's content with markup.
    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), DomError>;

    /// The element's inline `style.display`, empty when unset.
    fn display(&self, id: &str) -> Result<String, DomError>;

    fn set_display(&self, id: &str, display: &str) -> Result<(), DomError>;

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), DomError>;

    fn set_disabled(&self, id: &str, disabled: bool) -> Result<(), DomError>;

    /// Current value of a form control (`<select>` or `<input>`).
    fn value(&self, id: &str) -> Result<String, DomError>;
}
