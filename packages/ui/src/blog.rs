//! Blog post excerpts that expand and collapse.
//!
//! Every post has a control (the "Read more" button) and a content block.
//! Pages name the control after the content with a `-b` suffix, so
//! [`BlogPost::from_control_id`] can derive the pair; it refuses ids that do
//! not follow the convention instead of guessing.

use thiserror::Error;

/// Suffix appended to a content id to name its control.
pub const CONTROL_SUFFIX: &str = "-b";
/// Control label while the post is collapsed.
pub const READ_MORE: &str = "Read more";
/// Control label while the post is expanded.
pub const READ_LESS: &str = "Read less";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("blog control id `{0}` does not end in \"-b\"")]
pub struct InvalidBlogControl(pub String);

/// A (control id, content id) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    control_id: String,
    content_id: String,
}

impl BlogPost {
    pub fn new(control_id: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            control_id: control_id.into(),
            content_id: content_id.into(),
        }
    }

    /// Build the pair from a control id such as `"post-1-b"`.
    pub fn from_control_id(control_id: &str) -> Result<Self, InvalidBlogControl> {
        match control_id.strip_suffix(CONTROL_SUFFIX) {
            Some(content_id) if !content_id.is_empty() => Ok(Self::new(control_id, content_id)),
            _ => Err(InvalidBlogControl(control_id.to_string())),
        }
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }
}

/// Whether a content block with this inline `display` counts as collapsed.
pub fn is_collapsed(display: &str) -> bool {
    display.is_empty() || display == crate::document::DISPLAY_NONE
}
