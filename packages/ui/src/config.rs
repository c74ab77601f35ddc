//! # Page configuration: `portfolio.toml`
//!
//! Where the backend lives, what the endpoints are called, and which element
//! ids the controller writes to. The web app embeds the file at build time.
//!
//! ## Structure
//!
//! ```toml
//! base_url = ""                          # empty = the page's own origin
//!
//! [endpoints]
//! comments = "/data"
//! delete_comments = "/delete-data"
//! upload_url = "/blobstore-upload-url"
//! login_status = "/login-status"
//!
//! [comments]
//! default_quantity = 5                   # must be at least 1
//!
//! [elements]
//! fact_container = "fact-container"
//! comment_list = "comment-list"
//! delete_button = "delete-comments-button"
//! comment_form = "comment-form"
//! login_instructions = "login-logout-instructions"
//! quantity_select = "comment-quantity"
//! ```
//!
//! Every section and field has a default, so an empty file is the default
//! configuration.

use std::num::NonZeroU32;

use api::Endpoints;
use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Origin the endpoints are resolved against. Empty means the page origin.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub comments: CommentsConfig,
    #[serde(default)]
    pub elements: ElementIds,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentsConfig {
    /// Comments requested when no quantity is given.
    #[serde(default = "default_quantity")]
    pub default_quantity: NonZeroU32,
}

fn default_quantity() -> NonZeroU32 {
    NonZeroU32::new(5).unwrap_or(NonZeroU32::MIN)
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            default_quantity: default_quantity(),
        }
    }
}

/// Ids of the elements the controller owns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub fact_container: String,
    pub comment_list: String,
    pub delete_button: String,
    pub comment_form: String,
    pub login_instructions: String,
    pub quantity_select: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            fact_container: "fact-container".to_string(),
            comment_list: "comment-list".to_string(),
            delete_button: "delete-comments-button".to_string(),
            comment_form: "comment-form".to_string(),
            login_instructions: "login-logout-instructions".to_string(),
            quantity_select: "comment-quantity".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Builder method to point the endpoints at another origin.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The base URL, or `origin` when none is configured.
    pub fn resolve_base_url(&self, origin: &str) -> String {
        if self.base_url.is_empty() {
            origin.to_string()
        } else {
            self.base_url.clone()
        }
    }
}
