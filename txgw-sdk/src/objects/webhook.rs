//! Webhook bodies received from Tripletex and callbacks sent to the host.

use serde::{Deserialize, Serialize};

use super::{EntityKind, EntityStatus, ExternalId};

/// Loose view of a webhook body.
///
/// Only `event` is typed up front. The nested `invoice` / `subscription`
/// object is decoded on demand so a body aimed at the other gateway, or one
/// with extra fields, still parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl WebhookEnvelope {
    /// Decode the nested object for `kind`.
    ///
    /// `Ok(None)` when the key is absent or `null`.
    pub fn entity(&self, kind: EntityKind) -> Result<Option<EntityRef>, serde_json::Error> {
        match self.rest.get(kind.as_str()) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => EntityRef::deserialize(value).map(Some),
        }
    }
}

/// `{ "id": ..., "status": ... }` nested inside a webhook body.
///
/// `status` is kept as raw JSON: events that update unconditionally must not
/// depend on its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: ExternalId,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

impl EntityRef {
    /// The status when it is a JSON string.
    pub fn status_str(&self) -> Option<&str> {
        self.status.as_ref().and_then(serde_json::Value::as_str)
    }
}

/// Body of the status callback forwarded to the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCallback {
    pub entity: EntityKind,
    pub id: ExternalId,
    pub status: EntityStatus,
}
