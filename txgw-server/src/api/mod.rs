//! HTTP API.
//!
//! # Endpoints
//!
//! - `POST /invoices/pay`           – create an invoice payment, get a redirect
//! - `POST /subscriptions/pay`      – create a subscription payment, get a redirect
//! - `POST /webhooks/invoice`       – Tripletex invoice events
//! - `POST /webhooks/subscription`  – Tripletex subscription events
//! - `GET  /gateways`               – metadata and settings schema

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod extractors;
mod gateways;
mod payment;
mod webhook;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/invoices/pay", post(payment::pay_invoice))
        .route("/subscriptions/pay", post(payment::pay_subscription))
        .route("/webhooks/invoice", post(webhook::invoice_webhook))
        .route("/webhooks/subscription", post(webhook::subscription_webhook))
        .route("/gateways", get(gateways::list_gateways))
}
