//! This crate contains the page logic shared by every build of the site.
//!
//! The controller writes to the page only through the [`Document`] trait and
//! talks to the backend only through [`api::PortfolioApi`], so everything in
//! here runs the same against the browser DOM or the in-memory test doubles.

pub mod blog;
pub mod config;
pub mod document;
pub mod facts;
pub mod render;

mod controller;
pub use controller::{PageController, PageError};

mod memory;
pub use memory::{MemoryDocument, MemoryElement};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_document;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_document::WebDocument;

pub use blog::{BlogPost, InvalidBlogControl};
pub use config::PortfolioConfig;
pub use document::{Document, DomError};
