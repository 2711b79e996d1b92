//! TOML file configuration structures.
//!
//! These structs directly map to the `txgw-config.toml` file format.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use txgw_sdk::client::DEFAULT_API_BASE;
use txgw_sdk::config::{ACCOUNT_ID, API_KEY, REDACTED, TEST_MODE, WEBHOOK_SECRET};
use txgw_sdk::objects::Interval;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub tripletex: TripletexConfig,
    pub invoice: RedirectConfig,
    pub subscription: SubscriptionConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Tripletex account settings.
///
/// The four extension settings are optional here so that a missing value is
/// reported by name during validation instead of as a TOML parse error.
#[derive(Clone, Serialize, Deserialize)]
pub struct TripletexConfig {
    pub api_key: Option<String>,
    pub webhook_secret: Option<String>,
    #[serde(default)]
    pub test_mode: bool,
    pub account_id: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: Url,
    /// Request timeout in seconds for calls to Tripletex.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("valid default api base")
}

impl TripletexConfig {
    /// Look up an extension setting by its schema name.
    pub fn setting(&self, name: &str) -> Option<&str> {
        match name {
            n if n == API_KEY.name => self.api_key.as_deref(),
            n if n == WEBHOOK_SECRET.name => self.webhook_secret.as_deref(),
            n if n == ACCOUNT_ID.name => self.account_id.as_deref(),
            n if n == TEST_MODE.name => Some(if self.test_mode { "true" } else { "false" }),
            _ => None,
        }
    }
}

impl std::fmt::Debug for TripletexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripletexConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| REDACTED))
            .field("test_mode", &self.test_mode)
            .field("account_id", &self.account_id)
            .field("api_base", &self.api_base.as_str())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Redirect targets for one gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    pub success_redirect: Url,
    pub error_redirect: Url,
}

/// Subscription gateway section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionConfig {
    #[serde(flatten)]
    pub redirects: RedirectConfig,
    #[serde(default)]
    pub interval: Interval,
}

/// Host callback section.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Endpoint receiving status changes. Absent means log only.
    pub status_callback_url: Option<Url>,
    /// Secret for signing status callbacks.
    pub callback_secret: Option<String>,
}

impl std::fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostConfig")
            .field("status_callback_url", &self.status_callback_url.as_ref().map(Url::as_str))
            .field("callback_secret", &self.callback_secret.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"

[tripletex]
api_key = "key"
webhook_secret = "whsec"
test_mode = true
account_id = "acc-1"
timeout_secs = 15

[invoice]
success_redirect = "https://shop.example/invoice/ok"
error_redirect = "https://shop.example/invoice/error"

[subscription]
success_redirect = "https://shop.example/sub/ok"
error_redirect = "https://shop.example/sub/error"
interval = "yearly"

[host]
status_callback_url = "https://shop.example/hooks/status"
callback_secret = "host-secret"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert!(config.tripletex.test_mode);
        assert_eq!(config.tripletex.api_base.as_str(), "https://api.tripletex.no/");
        assert_eq!(config.tripletex.timeout_secs, Some(15));
        assert_eq!(config.subscription.interval, Interval::Yearly);
        assert_eq!(
            config.subscription.redirects.error_redirect.as_str(),
            "https://shop.example/sub/error"
        );
        assert!(config.host.status_callback_url.is_some());

        let printed = format!("{config:?}");
        assert!(!printed.contains("whsec"));
        assert!(!printed.contains("host-secret"));
        assert!(!printed.contains(r#""key""#));
        assert!(printed.contains("acc-1"));
    }

    #[test]
    fn test_minimal_config_defaults() {
        let toml_str = r#"
[tripletex]
api_key = "key"
webhook_secret = "whsec"
account_id = "acc-1"

[invoice]
success_redirect = "https://a.example/ok"
error_redirect = "https://a.example/err"

[subscription]
success_redirect = "https://a.example/ok"
error_redirect = "https://a.example/err"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen, default_listen_addr());
        assert!(!config.tripletex.test_mode);
        assert_eq!(config.subscription.interval, Interval::Monthly);
        assert!(config.host.status_callback_url.is_none());
        assert_eq!(config.tripletex.setting("tripletex_test_mode"), Some("false"));
        assert_eq!(config.tripletex.setting("tripletex_account_id"), Some("acc-1"));
    }
}
