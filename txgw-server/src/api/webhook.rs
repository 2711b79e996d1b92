//! Tripletex webhook endpoints.
//!
//! - `POST /webhooks/invoice`
//! - `POST /webhooks/subscription`
//!
//! A bad signature is rejected by [`VerifiedWebhook`] with 400. Every
//! verified delivery is answered with 200, whatever the outcome of dispatch.

use axum::{extract::State, http::StatusCode};
use txgw_core::gateway::{GatewayKind, Invoice, Subscription};
use txgw_core::webhook::WebhookReceiver;

use super::extractors::VerifiedWebhook;
use crate::state::AppState;

pub(super) async fn invoice_webhook(
    state: State<AppState>,
    VerifiedWebhook(body): VerifiedWebhook,
) -> StatusCode {
    receive::<Invoice>(&state, &body).await
}

pub(super) async fn subscription_webhook(
    state: State<AppState>,
    VerifiedWebhook(body): VerifiedWebhook,
) -> StatusCode {
    receive::<Subscription>(&state, &body).await
}

async fn receive<K: GatewayKind>(state: &AppState, body: &[u8]) -> StatusCode {
    let updater = state.updater().await;
    let outcome = WebhookReceiver::for_gateway::<K>()
        .dispatch(body, updater.as_ref())
        .await;
    tracing::debug!(entity = %K::ENTITY, ?outcome, "Webhook handled");
    StatusCode::OK
}
