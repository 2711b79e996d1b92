//! `GET /gateways` – metadata and settings schema of both gateways.

use axum::Json;
use serde::Serialize;
use txgw_core::gateway::{GatewayKind, Invoice, Subscription};
use txgw_sdk::config::{ConfigField, ExtensionMetadata, GATEWAY_SETTINGS};
use txgw_sdk::objects::EntityKind;

#[derive(Debug, Serialize)]
pub(super) struct GatewayDescription {
    id: EntityKind,
    metadata: ExtensionMetadata,
    settings: &'static [ConfigField],
    endpoint: &'static str,
    events: Vec<&'static str>,
}

fn describe<K: GatewayKind>() -> GatewayDescription {
    GatewayDescription {
        id: K::ENTITY,
        metadata: K::metadata(),
        settings: &GATEWAY_SETTINGS,
        endpoint: K::ENDPOINT,
        events: K::event_rules().iter().map(|rule| rule.event).collect(),
    }
}

pub(super) async fn list_gateways() -> Json<Vec<GatewayDescription>> {
    Json(vec![describe::<Invoice>(), describe::<Subscription>()])
}
