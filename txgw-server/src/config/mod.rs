//! Configuration module for txgw-server.
//!
//! Handles loading configuration from TOML files and CLI arguments, and
//! checks the required extension settings.

pub mod file;
pub mod runtime;

use crate::config::file::{FileConfig, HostConfig as FileHostConfig};
use crate::config::runtime::{
    HostConfig, RedirectPair, ServerConfig, SharedConfig, SubscriptionConfig, TripletexConfig,
};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use txgw_sdk::config::missing_required;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("missing required settings: {}", .0.join(", "))]
    MissingSettings(Vec<&'static str>),
}

/// Loaded configuration result containing all parts.
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub tripletex: TripletexConfig,
    pub invoice: RedirectPair,
    pub subscription: SubscriptionConfig,
    pub host: HostConfig,
}

impl LoadedConfig {
    /// Convert into a SharedConfig with Arc<RwLock<T>> wrappers.
    pub fn into_shared(self) -> SharedConfig {
        SharedConfig::new(
            self.server,
            self.tripletex,
            self.invoice,
            self.subscription,
            self.host,
        )
    }

    /// Overwrite every section of `shared` with this configuration.
    pub async fn apply_to(self, shared: &SharedConfig) {
        *shared.server.write().await = self.server;
        *shared.tripletex.write().await = self.tripletex;
        *shared.invoice.write().await = self.invoice;
        *shared.subscription.write().await = self.subscription;
        *shared.host.write().await = self.host;
    }
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI overrides
    /// 3. Check that every required setting is present and non-blank
    /// 4. Build the loaded configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        self.load_str(&config_content)
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn load_str(&self, config_content: &str) -> Result<LoadedConfig, ConfigError> {
        let mut file_config: FileConfig = toml::from_str(config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        validate(&file_config)?;

        build_loaded_config(file_config)
    }
}

fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    let missing = missing_required(|name| config.tripletex.setting(name));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingSettings(missing))
    }
}

fn build_loaded_config(file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
    let tripletex = file_config.tripletex;
    let (Some(api_key), Some(webhook_secret), Some(account_id)) =
        (tripletex.api_key, tripletex.webhook_secret, tripletex.account_id)
    else {
        // Only reachable if validate() was skipped.
        return Err(ConfigError::MissingSettings(vec![]));
    };

    Ok(LoadedConfig {
        server: ServerConfig {
            listen: file_config.server.listen,
        },
        tripletex: TripletexConfig {
            api_key,
            webhook_secret: webhook_secret.into_bytes().into_boxed_slice(),
            test_mode: tripletex.test_mode,
            account_id,
            api_base: tripletex.api_base,
            timeout: tripletex.timeout_secs.map(Duration::from_secs),
        },
        invoice: RedirectPair::new(
            file_config.invoice.success_redirect,
            file_config.invoice.error_redirect,
        ),
        subscription: SubscriptionConfig {
            redirects: RedirectPair::new(
                file_config.subscription.redirects.success_redirect,
                file_config.subscription.redirects.error_redirect,
            ),
            interval: file_config.subscription.interval,
        },
        host: convert_host(file_config.host),
    })
}

fn convert_host(h: FileHostConfig) -> HostConfig {
    HostConfig {
        status_callback_url: h.status_callback_url,
        callback_secret: h
            .callback_secret
            .filter(|s| !s.is_empty())
            .map(|s| s.into_bytes().into_boxed_slice()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[tripletex]
api_key = "key"
webhook_secret = "whsec"
account_id = "acc-1"

[invoice]
success_redirect = "https://a.example/ok"
error_redirect = "https://a.example/err"

[subscription]
success_redirect = "https://a.example/sub/ok"
error_redirect = "https://a.example/sub/err"
"#;

    #[test]
    fn test_load_builds_runtime_config() {
        let listen: SocketAddr = "127.0.0.1:9999".parse().unwrap();
        let loaded = ConfigLoader::new("unused.toml", Some(listen))
            .load_str(CONFIG)
            .unwrap();
        assert_eq!(loaded.server.listen, listen);
        assert_eq!(loaded.tripletex.secret_bytes(), b"whsec");
        assert_eq!(loaded.tripletex.timeout, None);
        assert_eq!(loaded.invoice.pick(false).as_str(), "https://a.example/err");
        assert_eq!(
            loaded.subscription.redirects.pick(true).as_str(),
            "https://a.example/sub/ok"
        );
        assert!(loaded.host.status_callback_url.is_none());
    }

    #[test]
    fn test_missing_required_settings_are_named() {
        let config = CONFIG
            .replace("api_key = \"key\"\n", "")
            .replace("account_id = \"acc-1\"", "account_id = \"  \"");
        let err = ConfigLoader::new("unused.toml", None)
            .load_str(&config)
            .err()
            .unwrap();
        match err {
            ConfigError::MissingSettings(names) => {
                assert_eq!(names, vec!["tripletex_api_key", "tripletex_account_id"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("txgw-config-{}.toml", std::process::id()));
        std::fs::write(&path, CONFIG).unwrap();
        let loaded = ConfigLoader::new(&path, None).load();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().tripletex.account_id, "acc-1");
    }
}
