use thiserror::Error;

/// Failure talking to one of the portfolio endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid endpoint url {url}: {reason}")]
    Url { url: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}
