//! Forwards status changes to the host over HTTP.
//!
//! One `POST` per change with a [`StatusCallback`] JSON body. When a callback
//! secret is configured the body is signed with HMAC-SHA256 (hex) in
//! `X-Gateway-Signature`. There is no retry: a failed call is returned to the
//! receiver, which logs it.

use async_trait::async_trait;
use thiserror::Error;
use txgw_sdk::config::REDACTED;
use txgw_sdk::objects::{EntityKind, EntityStatus, ExternalId, StatusCallback};
use txgw_sdk::signature::{CALLBACK_SIGNATURE_HEADER, sign_hex};
use url::Url;

use super::StatusUpdater;

/// Errors that can occur while forwarding a status change.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("host rejected status callback with status {status}: {body}")]
    DeliveryFailed { status: u16, body: String },
}

/// [`StatusUpdater`] that posts to a host endpoint.
#[derive(Clone)]
pub struct HttpStatusForwarder {
    http_client: reqwest::Client,
    url: Url,
    secret: Option<Box<[u8]>>,
}

impl std::fmt::Debug for HttpStatusForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpStatusForwarder")
            .field("url", &self.url.as_str())
            .field("secret", &self.secret.as_ref().map(|_| REDACTED))
            .finish_non_exhaustive()
    }
}

impl HttpStatusForwarder {
    pub fn new(http_client: reqwest::Client, url: Url, secret: Option<Box<[u8]>>) -> Self {
        Self {
            http_client,
            url,
            secret,
        }
    }

    async fn send(&self, callback: &StatusCallback) -> Result<(), ForwardError> {
        let body = serde_json::to_string(callback)?;

        let mut request = self
            .http_client
            .post(self.url.clone())
            .header("Content-Type", "application/json");

        if let Some(secret) = &self.secret {
            request = request.header(CALLBACK_SIGNATURE_HEADER, sign_hex(body.as_bytes(), secret));
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ForwardError::DeliveryFailed {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl StatusUpdater for HttpStatusForwarder {
    async fn update_status(
        &self,
        entity: EntityKind,
        id: &ExternalId,
        status: EntityStatus,
    ) -> anyhow::Result<()> {
        let callback = StatusCallback {
            entity,
            id: id.clone(),
            status,
        };
        self.send(&callback).await?;
        tracing::debug!(%entity, %id, %status, url = %self.url, "Forwarded status to host");
        Ok(())
    }
}
