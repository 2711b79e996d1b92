//! Payment payloads sent to Tripletex and the host-facing pay API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use super::ExternalId;

/// Currency of every payment the gateways create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Nok,
}

/// Billing interval of a subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

/// Body of `POST /v2/invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub invoice_id: ExternalId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub account_id: String,
    pub test_mode: bool,
    pub currency: Currency,
}

/// Body of `POST /v2/subscriptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPayload {
    pub invoice_id: ExternalId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub account_id: String,
    pub test_mode: bool,
    pub recurring: bool,
    pub interval: Interval,
    pub currency: Currency,
}

/// The part of a Tripletex response the gateways look at.
///
/// Only `status` is inspected; everything else is kept for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// A purchased product as the host describes it. Carried through, never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Host → gateway: start a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRequest {
    pub total: Decimal,
    #[serde(default)]
    pub products: Vec<LineItem>,
    pub invoice_id: ExternalId,
}

/// Gateway → host: where to send the payer next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResponse {
    pub redirect_url: Url,
}
