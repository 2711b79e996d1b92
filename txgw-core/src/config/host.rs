//! Host application callback settings.

use url::Url;

use txgw_sdk::config::REDACTED;

/// Where the webhook receiver forwards status changes.
#[derive(Clone, Default)]
pub struct HostConfig {
    /// Endpoint that receives `StatusCallback` JSON. `None` means status
    /// changes are only logged.
    pub status_callback_url: Option<Url>,
    /// Secret for the `X-Gateway-Signature` header on callbacks.
    pub callback_secret: Option<Box<[u8]>>,
}

impl std::fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostConfig")
            .field("status_callback_url", &self.status_callback_url.as_ref().map(Url::as_str))
            .field("callback_secret", &self.callback_secret.as_ref().map(|_| REDACTED))
            .finish()
    }
}
