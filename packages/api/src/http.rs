//! `reqwest`-backed [`PortfolioApi`].
//!
//! `reqwest` only accepts absolute URLs, including in the browser, so the
//! client is built from the page origin plus the configured [`Endpoints`].

use std::num::NonZeroU32;

use reqwest::{Client, StatusCode, Url};

use crate::client::{Endpoints, PortfolioApi};
use crate::error::ApiError;
use crate::models::{Comment, CommentRecord, LoginStatus, LoginStatusRecord};

/// HTTP client for the portfolio backend.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base: Url,
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(base_url: &str, endpoints: Endpoints) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url, endpoints)
    }

    /// Like [`HttpApi::new`], with a preconfigured `reqwest` client.
    pub fn with_client(
        client: Client,
        base_url: &str,
        endpoints: Endpoints,
    ) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::Url {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            base,
            endpoints,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(|e| ApiError::Url {
            url: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// URL of the comment listing, e.g. `https://host/data?quantity=5`.
    pub fn comments_url(&self, quantity: NonZeroU32) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&self.endpoints.comments)?;
        url.query_pairs_mut()
            .append_pair("quantity", &quantity.to_string());
        Ok(url)
    }

    pub fn delete_comments_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&self.endpoints.delete_comments)
    }

    pub fn upload_url_endpoint(&self) -> Result<Url, ApiError> {
        self.endpoint(&self.endpoints.upload_url)
    }

    pub fn login_status_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&self.endpoints.login_status)
    }

    /// GET `url` and return the body of a 2xx response.
    async fn get_text(&self, url: Url) -> Result<String, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        ensure_success(&url, response.status())?;
        Ok(response.text().await?)
    }
}

fn ensure_success(url: &Url, status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// The upload endpoint answers with the URL followed by a newline.
fn upload_url_from_body(body: &str) -> String {
    body.trim().to_string()
}

impl PortfolioApi for HttpApi {
    async fn fetch_comments(&self, quantity: NonZeroU32) -> Result<Vec<Comment>, ApiError> {
        let body = self.get_text(self.comments_url(quantity)?).await?;
        let records: Vec<CommentRecord> = serde_json::from_str(&body)?;
        Ok(records.into_iter().map(CommentRecord::into_comment).collect())
    }

    async fn delete_all_comments(&self) -> Result<(), ApiError> {
        let url = self.delete_comments_url()?;
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).send().await?;
        if !response.status().is_success() {
            tracing::warn!("delete returned {}, ignoring", response.status());
        }
        Ok(())
    }

    async fn fetch_upload_url(&self) -> Result<String, ApiError> {
        let body = self.get_text(self.upload_url_endpoint()?).await?;
        Ok(upload_url_from_body(&body))
    }

    async fn fetch_login_status(&self) -> Result<LoginStatus, ApiError> {
        let body = self.get_text(self.login_status_url()?).await?;
        let record: LoginStatusRecord = serde_json::from_str(&body)?;
        record.try_into()
    }
}
