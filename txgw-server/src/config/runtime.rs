//! Runtime configuration re-exports.
//!
//! The actual config types are defined in `txgw-core::config`.

pub use txgw_core::config::{
    HostConfig, RedirectPair, ServerConfig, SharedConfig, SubscriptionConfig, TripletexConfig,
};
