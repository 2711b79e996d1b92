//! HTTP client for the Tripletex billing API.
//!
//! Gated behind the `client` cargo feature so crates that only need the wire
//! types and signature helpers do not pull in `reqwest`.

mod tripletex;

pub use tripletex::{DEFAULT_API_BASE, TripletexClient};

use reqwest::StatusCode;

/// Errors produced by the Tripletex client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The API answered without `"status": "success"`.
    #[error("request not accepted: http {http_status}, status {status:?}")]
    Rejected {
        http_status: StatusCode,
        status: Option<String>,
    },
}
