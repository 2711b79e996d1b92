//! Wire types shared by the gateways, the host API and the webhook receiver.

pub mod payment;
pub mod webhook;

pub use payment::{
    ApiResponse, Currency, Interval, InvoicePayload, LineItem, PayRequest, PayResponse,
    SubscriptionPayload,
};
pub use webhook::{EntityRef, StatusCallback, WebhookEnvelope};

use serde::{Deserialize, Serialize};

/// An identifier owned by Tripletex or the host (invoice or subscription id).
///
/// The host may send either a JSON number or a string; whatever shape came
/// in is the shape that goes out again. Ids that are neither an `i64` nor a
/// string (floats, large unsigned numbers, booleans) are kept verbatim in
/// [`ExternalId::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl ExternalId {
    /// Whether the id is a single JSON value rather than `null`, an array or
    /// an object.
    pub fn is_scalar(&self) -> bool {
        match self {
            ExternalId::Number(_) | ExternalId::Text(_) => true,
            ExternalId::Other(value) => !matches!(
                value,
                serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_)
            ),
        }
    }
}

impl std::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExternalId::Number(n) => write!(f, "{n}"),
            ExternalId::Text(s) => f.write_str(s),
            ExternalId::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ExternalId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ExternalId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ExternalId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Which kind of local record a webhook refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Invoice,
    Subscription,
}

impl EntityKind {
    /// Key of the nested object in a webhook body (`"invoice"` / `"subscription"`).
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Invoice => "invoice",
            EntityKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status the host is asked to record for an invoice or subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Paid,
    Canceled,
    Active,
    Inactive,
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityStatus::Paid => write!(f, "paid"),
            EntityStatus::Canceled => write!(f, "canceled"),
            EntityStatus::Active => write!(f, "active"),
            EntityStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_id_keeps_its_json_shape() {
        let n: ExternalId = serde_json::from_str("42").unwrap();
        let s: ExternalId = serde_json::from_str(r#""INV-42""#).unwrap();
        assert_eq!(n, ExternalId::Number(42));
        assert_eq!(s, ExternalId::Text("INV-42".into()));
        assert_eq!(serde_json::to_string(&n).unwrap(), "42");
        assert_eq!(serde_json::to_string(&s).unwrap(), r#""INV-42""#);
        assert_eq!(s.to_string(), "INV-42");
    }

    #[test]
    fn unusual_scalar_ids_pass_through_unchanged() {
        for raw in ["5.0", "18446744073709551615", "true"] {
            let id: ExternalId = serde_json::from_str(raw).unwrap();
            assert!(matches!(id, ExternalId::Other(_)), "{raw} parsed as {id:?}");
            assert!(id.is_scalar());
            assert_eq!(serde_json::to_string(&id).unwrap(), raw);
        }
        let null: ExternalId = serde_json::from_str("null").unwrap();
        assert!(!null.is_scalar());
        let list: ExternalId = serde_json::from_str("[1]").unwrap();
        assert!(!list.is_scalar());
    }

    #[test]
    fn entity_status_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&EntityStatus::Canceled).unwrap(),
            r#""canceled""#
        );
        assert_eq!(EntityStatus::Inactive.to_string(), "inactive");
    }
}
