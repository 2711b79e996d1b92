//! Application state shared across all request handlers.

use crate::config::runtime::{HostConfig, SharedConfig};
use std::sync::Arc;
use tokio::sync::RwLock;
use txgw_core::gateway::Account;
use txgw_core::updaters::{HttpStatusForwarder, LoggingStatusUpdater, StatusUpdater};
use txgw_sdk::client::TripletexClient;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration (can be reloaded via SIGHUP).
    pub config: SharedConfig,
    /// Connection pool reused for Tripletex and host calls.
    pub http: reqwest::Client,
    /// Host callback for webhook status changes.
    updater: Arc<RwLock<Arc<dyn StatusUpdater>>>,
}

impl AppState {
    /// Create a new AppState, deriving the status updater from the host section.
    pub async fn new(config: SharedConfig, http: reqwest::Client) -> Self {
        let updater = updater_for(&*config.host.read().await, &http);
        Self::with_updater(config, http, updater)
    }

    /// Create a new AppState with an explicit status updater.
    pub fn with_updater(
        config: SharedConfig,
        http: reqwest::Client,
        updater: Arc<dyn StatusUpdater>,
    ) -> Self {
        Self {
            config,
            http,
            updater: Arc::new(RwLock::new(updater)),
        }
    }

    /// Current status updater.
    pub async fn updater(&self) -> Arc<dyn StatusUpdater> {
        self.updater.read().await.clone()
    }

    /// Rebuild the status updater after the host section changed.
    pub async fn refresh_updater(&self) {
        let updater = updater_for(&*self.config.host.read().await, &self.http);
        *self.updater.write().await = updater;
    }

    /// Tripletex client and account values from the current configuration.
    ///
    /// The config lock is released before returning.
    pub async fn tripletex(&self) -> (TripletexClient, Account) {
        let config = self.config.tripletex.read().await;
        let client = TripletexClient::new(config.api_base.clone(), config.api_key.clone())
            .with_http_client(self.http.clone())
            .with_timeout(config.timeout);
        (client, Account::from(&*config))
    }

    /// Webhook secret bytes from the current configuration.
    pub async fn webhook_secret(&self) -> Box<[u8]> {
        self.config.tripletex.read().await.webhook_secret.clone()
    }
}

fn updater_for(host: &HostConfig, http: &reqwest::Client) -> Arc<dyn StatusUpdater> {
    match &host.status_callback_url {
        Some(url) => {
            tracing::info!(%url, "Forwarding status changes to host");
            Arc::new(HttpStatusForwarder::new(
                http.clone(),
                url.clone(),
                host.callback_secret.clone(),
            ))
        }
        None => {
            tracing::warn!(
                "No host status callback configured, status changes will only be logged"
            );
            Arc::new(LoggingStatusUpdater)
        }
    }
}
