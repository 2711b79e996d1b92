//! Host payment endpoints.
//!
//! - `POST /invoices/pay`
//! - `POST /subscriptions/pay`
//!
//! Body: [`PayRequest`]. Response: [`PayResponse`] with the redirect chosen
//! by the gateway. Failures talking to Tripletex are not errors here; they
//! select the error redirect.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use txgw_core::gateway::{
    BillingGateway, GatewayKind, Invoice, PaymentError, PaymentRequest, Subscription,
};
use txgw_sdk::objects::{PayRequest, PayResponse};

use crate::state::AppState;

pub(super) async fn pay_invoice(
    state: State<AppState>,
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> Result<Json<PayResponse>, PayApiError> {
    let request = parse(payload)?;
    let redirects = state.config.invoice.read().await.clone();
    let (client, account) = state.tripletex().await;
    let gateway = BillingGateway::new(Invoice, client, account, redirects);
    Ok(pay(&gateway, &request).await)
}

pub(super) async fn pay_subscription(
    state: State<AppState>,
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> Result<Json<PayResponse>, PayApiError> {
    let request = parse(payload)?;
    let subscription = state.config.subscription.read().await.clone();
    let (client, account) = state.tripletex().await;
    let gateway = BillingGateway::new(
        Subscription {
            interval: subscription.interval,
        },
        client,
        account,
        subscription.redirects,
    );
    Ok(pay(&gateway, &request).await)
}

fn parse(
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> Result<PaymentRequest, PayApiError> {
    let Json(body) = payload?;
    Ok(PaymentRequest::try_from(body)?)
}

async fn pay<K: GatewayKind>(
    gateway: &BillingGateway<K>,
    request: &PaymentRequest,
) -> Json<PayResponse> {
    let redirect_url = gateway.pay(request).await;
    Json(PayResponse { redirect_url })
}

/// Errors that can occur in payment handlers.
#[derive(Debug, thiserror::Error)]
pub(super) enum PayApiError {
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl IntoResponse for PayApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!(error = %self, "Rejected pay request");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
