//! Runtime configuration for the gateways.
//!
//! These types hold validated values. Loading and parsing the TOML file is
//! the server crate's job.

mod host;
mod redirects;
mod server;
mod tripletex;

pub use host::HostConfig;
pub use redirects::RedirectPair;
pub use server::ServerConfig;
pub use tripletex::TripletexConfig;

use std::sync::Arc;
use tokio::sync::RwLock;
use txgw_sdk::objects::Interval;

/// Subscription gateway settings.
#[derive(Debug, Clone)]
pub struct SubscriptionConfig {
    pub redirects: RedirectPair,
    pub interval: Interval,
}

/// Shared configuration state with separate locks for each section.
///
/// Sections are swapped wholesale on reload; readers copy what they need
/// and release the lock before doing network I/O.
#[derive(Clone)]
pub struct SharedConfig {
    /// Listen address.
    pub server: Arc<RwLock<ServerConfig>>,
    /// Tripletex account settings shared by both gateways.
    pub tripletex: Arc<RwLock<TripletexConfig>>,
    /// Invoice gateway redirects.
    pub invoice: Arc<RwLock<RedirectPair>>,
    /// Subscription gateway redirects and interval.
    pub subscription: Arc<RwLock<SubscriptionConfig>>,
    /// Where status updates are forwarded.
    pub host: Arc<RwLock<HostConfig>>,
}

impl SharedConfig {
    pub fn new(
        server: ServerConfig,
        tripletex: TripletexConfig,
        invoice: RedirectPair,
        subscription: SubscriptionConfig,
        host: HostConfig,
    ) -> Self {
        Self {
            server: Arc::new(RwLock::new(server)),
            tripletex: Arc::new(RwLock::new(tripletex)),
            invoice: Arc::new(RwLock::new(invoice)),
            subscription: Arc::new(RwLock::new(subscription)),
            host: Arc::new(RwLock::new(host)),
        }
    }
}
