//! Tripletex account settings.

use std::time::Duration;
use url::Url;

use txgw_sdk::config::REDACTED;

/// The four extension settings plus transport options.
///
/// `Debug` redacts the API key and webhook secret.
#[derive(Clone)]
pub struct TripletexConfig {
    /// Bearer token for the billing API.
    pub api_key: String,
    /// HMAC key for incoming webhooks.
    pub webhook_secret: Box<[u8]>,
    /// Sent as `testMode` in every payload.
    pub test_mode: bool,
    /// Sent as `accountId` in every payload.
    pub account_id: String,
    /// API root, normally `https://api.tripletex.no`.
    pub api_base: Url,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl TripletexConfig {
    /// Get the webhook secret bytes for HMAC verification.
    pub fn secret_bytes(&self) -> &[u8] {
        &self.webhook_secret
    }
}

impl std::fmt::Debug for TripletexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripletexConfig")
            .field("api_key", &REDACTED)
            .field("webhook_secret", &REDACTED)
            .field("test_mode", &self.test_mode)
            .field("account_id", &self.account_id)
            .field("api_base", &self.api_base.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}
