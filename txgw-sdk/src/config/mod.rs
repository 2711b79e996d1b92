//! Declarative description of the gateway settings and extension metadata.
//!
//! The host renders these in its extension settings screen. Runtime values
//! live in `txgw-core::config`; this module only describes them.

mod metadata;
mod schema;

pub use metadata::ExtensionMetadata;
pub use schema::{
    API_KEY, ACCOUNT_ID, ConfigField, GATEWAY_SETTINGS, SettingKind, TEST_MODE, WEBHOOK_SECRET,
    missing_required,
};

/// Placeholder printed instead of secret settings in `Debug` output.
pub const REDACTED: &str = "<redacted>";
