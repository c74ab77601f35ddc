//! # The [`PortfolioApi`] trait and endpoint paths
//!
//! Every network call the page makes goes through [`PortfolioApi`]. There are two
//! implementations:
//!
//! | Type | Used by |
//! |------|---------|
//! | [`crate::HttpApi`] | The browser build. Issues real requests with `reqwest`. |
//! | [`crate::MemoryApi`] | Tests. Serves canned records and logs each call. |
//!
//! The trait uses plain `async fn` return types without a `Send` bound: in the
//! browser, `reqwest` futures are tied to the single JS thread.

use std::future::Future;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Comment, LoginStatus};

/// Async interface to the portfolio backend.
pub trait PortfolioApi {
    /// Fetch at most `quantity` comments, in server order.
    fn fetch_comments(
        &self,
        quantity: NonZeroU32,
    ) -> impl Future<Output = Result<Vec<Comment>, ApiError>>;

    /// Ask the server to delete every comment. Any HTTP response counts as done.
    fn delete_all_comments(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// Fetch a one-shot blob upload URL for the comment form.
    fn fetch_upload_url(&self) -> impl Future<Output = Result<String, ApiError>>;

    fn fetch_login_status(&self) -> impl Future<Output = Result<LoginStatus, ApiError>>;
}

/// Paths of the backend endpoints, relative to the site origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_comments")]
    pub comments: String,
    #[serde(default = "default_delete_comments")]
    pub delete_comments: String,
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
    #[serde(default = "default_login_status")]
    pub login_status: String,
}

fn default_comments() -> String {
    "/data".to_string()
}

fn default_delete_comments() -> String {
    "/delete-data".to_string()
}

fn default_upload_url() -> String {
    "/blobstore-upload-url".to_string()
}

fn default_login_status() -> String {
    "/login-status".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            comments: default_comments(),
            delete_comments: default_delete_comments(),
            upload_url: default_upload_url(),
            login_status: default_login_status(),
        }
    }
}
