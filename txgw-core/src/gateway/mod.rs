//! Payment initiation shared by the invoice and subscription gateways.
//!
//! The two gateways differ only in endpoint, payload shape, metadata and
//! webhook rules. Those live behind [`GatewayKind`]; everything else is
//! [`BillingGateway`].

mod invoice;
mod request;
mod subscription;

pub use invoice::{INVOICE_RULES, Invoice};
pub use request::{PaymentError, PaymentRequest};
pub use subscription::{SUBSCRIPTION_RULES, Subscription};

use serde::Serialize;
use txgw_sdk::client::{ClientError, TripletexClient};
use txgw_sdk::config::ExtensionMetadata;
use txgw_sdk::objects::{ApiResponse, EntityKind};
use url::Url;

use crate::config::{RedirectPair, TripletexConfig};
use crate::webhook::EventRule;

/// Account-level values copied into every payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: String,
    pub test_mode: bool,
}

impl From<&TripletexConfig> for Account {
    fn from(config: &TripletexConfig) -> Self {
        Self {
            account_id: config.account_id.clone(),
            test_mode: config.test_mode,
        }
    }
}

/// What distinguishes one gateway from the other.
pub trait GatewayKind: Send + Sync {
    /// JSON body posted to [`ENDPOINT`](Self::ENDPOINT).
    type Payload: Serialize + Send + Sync;

    /// API path, relative to the API root.
    const ENDPOINT: &'static str;

    /// Which local record the webhooks of this gateway update.
    const ENTITY: EntityKind;

    fn metadata() -> ExtensionMetadata;

    /// Event name → status rule table used by the webhook receiver.
    fn event_rules() -> &'static [EventRule];

    fn build_payload(&self, request: &PaymentRequest, account: &Account) -> Self::Payload;
}

/// A gateway ready to create payments for one account.
#[derive(Debug, Clone)]
pub struct BillingGateway<K: GatewayKind> {
    kind: K,
    client: TripletexClient,
    account: Account,
    redirects: RedirectPair,
}

impl<K: GatewayKind> BillingGateway<K> {
    pub fn new(
        kind: K,
        client: TripletexClient,
        account: Account,
        redirects: RedirectPair,
    ) -> Self {
        Self {
            kind,
            client,
            account,
            redirects,
        }
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn payload(&self, request: &PaymentRequest) -> K::Payload {
        self.kind.build_payload(request, &self.account)
    }

    /// Post the payment and return the API's answer.
    pub async fn submit(&self, request: &PaymentRequest) -> Result<ApiResponse, ClientError> {
        let payload = self.payload(request);
        self.client.submit(K::ENDPOINT, &payload).await
    }

    /// Create the payment and pick the redirect for the payer.
    ///
    /// Never fails: any problem talking to Tripletex, or any answer other
    /// than `"status": "success"`, yields the error redirect.
    pub async fn pay(&self, request: &PaymentRequest) -> Url {
        let accepted = match self.submit(request).await {
            Ok(_) => {
                tracing::info!(
                    entity = %K::ENTITY,
                    invoice_id = %request.invoice_id(),
                    "Tripletex accepted payment"
                );
                true
            }
            Err(ClientError::Rejected {
                http_status,
                status,
            }) => {
                tracing::warn!(
                    entity = %K::ENTITY,
                    invoice_id = %request.invoice_id(),
                    %http_status,
                    status = status.as_deref().unwrap_or("<missing>"),
                    "Tripletex did not accept payment"
                );
                false
            }
            Err(e) => {
                tracing::error!(
                    entity = %K::ENTITY,
                    invoice_id = %request.invoice_id(),
                    error = %e,
                    "Failed to submit payment to Tripletex"
                );
                false
            }
        };
        self.redirects.pick(accepted).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::post};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    fn redirects() -> RedirectPair {
        RedirectPair::new(
            Url::parse("https://shop.example/ok").unwrap(),
            Url::parse("https://shop.example/error").unwrap(),
        )
    }

    fn account() -> Account {
        Account {
            account_id: "acc-77".into(),
            test_mode: true,
        }
    }

    async fn spawn(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    /// Fake Tripletex that records bodies posted to `path` and answers `reply`.
    async fn fake_api(path: &str, reply: Value) -> (Url, Arc<Mutex<Vec<Value>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let router = Router::new().route(
            path,
            post(move |Json(body): Json<Value>| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    recorder.lock().unwrap().push(body);
                    Json(reply)
                }
            }),
        );
        (spawn(router).await, seen)
    }

    fn request() -> PaymentRequest {
        PaymentRequest::new(Decimal::new(25000, 2), vec![], 1001.into()).unwrap()
    }

    #[tokio::test]
    async fn invoice_success_returns_success_redirect() {
        let (base, seen) = fake_api("/v2/invoices", json!({"status": "success"})).await;
        let gateway = BillingGateway::new(
            Invoice,
            TripletexClient::new(base, "key"),
            account(),
            redirects(),
        );

        let url = gateway.pay(&request()).await;
        assert_eq!(url.as_str(), "https://shop.example/ok");
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[json!({
                "invoiceId": 1001,
                "amount": 250.0,
                "accountId": "acc-77",
                "testMode": true,
                "currency": "NOK",
            })]
        );
    }

    #[tokio::test]
    async fn subscription_posts_recurring_fields() {
        let (base, seen) = fake_api("/v2/subscriptions", json!({"status": "success"})).await;
        let gateway = BillingGateway::new(
            Subscription::default(),
            TripletexClient::new(base, "key"),
            account(),
            redirects(),
        );

        assert_eq!(gateway.pay(&request()).await.as_str(), "https://shop.example/ok");
        let body = seen.lock().unwrap()[0].clone();
        assert_eq!(body["recurring"], json!(true));
        assert_eq!(body["interval"], json!("monthly"));
        assert_eq!(body["currency"], json!("NOK"));
    }

    #[tokio::test]
    async fn any_other_answer_returns_error_redirect() {
        for reply in [
            json!({"status": "failed"}),
            json!({"message": "no status here"}),
            json!({"status": null}),
            json!([1, 2, 3]),
        ] {
            let (base, _) = fake_api("/v2/invoices", reply.clone()).await;
            let gateway = BillingGateway::new(
                Invoice,
                TripletexClient::new(base, "key"),
                account(),
                redirects(),
            );
            assert_eq!(
                gateway.pay(&request()).await.as_str(),
                "https://shop.example/error",
                "reply {reply} should not count as success"
            );
        }
    }

    #[tokio::test]
    async fn unreachable_api_returns_error_redirect() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = BillingGateway::new(
            Invoice,
            TripletexClient::new(Url::parse(&format!("http://{addr}")).unwrap(), "key"),
            account(),
            redirects(),
        );
        assert_eq!(gateway.pay(&request()).await.as_str(), "https://shop.example/error");
    }
}
