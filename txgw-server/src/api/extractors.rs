//! Custom Axum extractors for request authentication.
//!
//! Provides `VerifiedWebhook`, which checks the `X-Tripletex-Signature`
//! header against the raw request body before any handler runs.
//!
//! All cryptographic operations are delegated to [`txgw_sdk::signature`].

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use txgw_sdk::signature::{self, SIGNATURE_HEADER, SignatureError};

use crate::state::AppState;

/// Maximum accepted webhook body size.
pub const MAX_WEBHOOK_BODY: usize = 1024 * 1024;

/// An Axum extractor that yields the raw webhook body once its signature
/// has been verified.
///
/// # Header format
///
/// ```text
/// X-Tripletex-Signature: {hex_or_base64_hmac}
/// ```
///
/// The signature is `HMAC-SHA256(raw_body, webhook_secret)`. The bytes are
/// handed to the handler untouched so nothing is re-encoded before dispatch.
pub struct VerifiedWebhook(pub Bytes);

/// Errors that can occur during webhook verification.
///
/// Every variant is answered with `400 Bad Request`.
#[derive(Debug, thiserror::Error)]
pub enum VerifiedWebhookError {
    #[error("missing X-Tripletex-Signature header")]
    MissingHeader,
    #[error("invalid X-Tripletex-Signature header")]
    InvalidHeader,
    #[error("failed to read request body")]
    BodyReadError,
    #[error("signature verification failed")]
    VerificationFailed,
}

impl From<SignatureError> for VerifiedWebhookError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::MissingHeader => Self::MissingHeader,
            SignatureError::InvalidEncoding => Self::InvalidHeader,
            SignatureError::SignatureMismatch => Self::VerificationFailed,
        }
    }
}

impl IntoResponse for VerifiedWebhookError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Rejected webhook");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl FromRequest<AppState> for VerifiedWebhook {
    type Rejection = VerifiedWebhookError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let header_value = match req.headers().get(SIGNATURE_HEADER) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| VerifiedWebhookError::InvalidHeader)?
                    .to_owned(),
            ),
            None => None,
        };

        let body = axum::body::to_bytes(req.into_body(), MAX_WEBHOOK_BODY)
            .await
            .map_err(|_| VerifiedWebhookError::BodyReadError)?;

        let secret = state.webhook_secret().await;
        signature::verify_body(&body, header_value.as_deref(), &secret)?;

        Ok(VerifiedWebhook(body))
    }
}
