//! # API crate: client side of the portfolio backend
//!
//! Everything the page needs to talk to the servlet backend: wire records,
//! their typed projections, and the [`PortfolioApi`] trait with its two
//! implementations.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`PortfolioApi`] trait and configurable [`Endpoints`] |
//! | [`models`] | [`CommentRecord`]/[`Comment`] and [`LoginStatusRecord`]/[`LoginStatus`] |
//! | [`error`] | [`ApiError`] |
//! | `http` | [`HttpApi`], the `reqwest` implementation |
//! | `memory` | [`MemoryApi`], an in-memory backend for tests |
//!
//! ## Endpoints
//!
//! | Endpoint | Method | Response |
//! |----------|--------|----------|
//! | `/data?quantity=N` | GET | JSON array of comment records |
//! | `/delete-data` | POST | ignored |
//! | `/blobstore-upload-url` | GET | plain-text URL |
//! | `/login-status` | GET | JSON `{loggedIn, loginUrl, logoutUrl}` |
//!
//! The backend encodes booleans as the strings `"true"` and `"false"`. Those
//! strings are compared exactly when a record is converted, and the rest of
//! the workspace only sees enums.

pub mod client;
pub mod error;
pub mod models;

mod http;
pub use http::HttpApi;

mod memory;
pub use memory::{ApiCall, MemoryApi};

pub use client::{Endpoints, PortfolioApi};
pub use error::ApiError;
pub use models::{AuthorEmail, Comment, CommentRecord, LoginStatus, LoginStatusRecord};
