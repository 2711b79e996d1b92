//! Typed client for the Tripletex invoice and subscription endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use url::Url;

use super::ClientError;
use crate::config::REDACTED;
use crate::objects::ApiResponse;

/// Production API root.
pub const DEFAULT_API_BASE: &str = "https://api.tripletex.no";

/// Minimal Tripletex API client.
///
/// Every request is a JSON `POST` authenticated with
/// `Authorization: Bearer <api_key>`.
#[derive(Clone)]
pub struct TripletexClient {
    http: Client,
    base_url: Url,
    api_key: String,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for TripletexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripletexClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &REDACTED)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TripletexClient {
    /// Create a new `TripletexClient`.
    ///
    /// * `base_url` – API root, usually [`DEFAULT_API_BASE`].
    /// * `api_key` – bearer token for the account.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Bound every request by `timeout`. `None` keeps the transport default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `endpoint` below the base URL.
    ///
    /// Any path on the base is kept (`https://gw.example/tripletex` +
    /// `/v2/invoices` gives `https://gw.example/tripletex/v2/invoices`), with
    /// or without a trailing slash on the base or a leading one on the
    /// endpoint.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, ClientError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(endpoint.trim_start_matches('/'))?)
    }

    /// `POST {base}{endpoint}` with `payload` as JSON.
    ///
    /// Succeeds only when the body parses and carries `"status": "success"`.
    /// The HTTP status code is reported in the error but does not decide the
    /// outcome on its own.
    pub async fn submit<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint_url(endpoint)?;

        let mut request = self.http.post(url).bearer_auth(&self.api_key).json(payload);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let resp = request.send().await?;

        let http_status = resp.status();
        if !http_status.is_success() {
            tracing::warn!(%http_status, endpoint, "Tripletex answered with a non-2xx status");
        }

        let bytes = resp.bytes().await?;
        let body: ApiResponse = serde_json::from_slice(&bytes)?;
        if body.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Rejected {
                http_status,
                status: body.status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, routing::post};
    use serde_json::{Value, json};

    async fn spawn(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    #[tokio::test]
    async fn sends_bearer_token_and_json_body() {
        let router = Router::new().route(
            "/v2/invoices",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                Json(json!({
                    "status": "success",
                    "auth": auth,
                    "contentType": content_type,
                    "echo": body,
                }))
            }),
        );
        let base = spawn(router).await;
        let client = TripletexClient::new(base, "secret-key");

        let resp = client
            .submit("/v2/invoices", &json!({"invoiceId": 1}))
            .await
            .unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.rest["auth"], json!("Bearer secret-key"));
        assert_eq!(resp.rest["contentType"], json!("application/json"));
        assert_eq!(resp.rest["echo"], json!({"invoiceId": 1}));
    }

    #[test]
    fn endpoint_keeps_base_path() {
        for base in ["https://gw.example/tripletex", "https://gw.example/tripletex/"] {
            let client = TripletexClient::new(Url::parse(base).unwrap(), "k");
            for endpoint in ["/v2/invoices", "v2/invoices"] {
                assert_eq!(
                    client.endpoint_url(endpoint).unwrap().as_str(),
                    "https://gw.example/tripletex/v2/invoices"
                );
            }
        }
        let client = TripletexClient::new(Url::parse(DEFAULT_API_BASE).unwrap(), "k");
        assert_eq!(
            client.endpoint_url("/v2/subscriptions").unwrap().as_str(),
            "https://api.tripletex.no/v2/subscriptions"
        );
    }

    #[test]
    fn debug_hides_api_key() {
        let client = TripletexClient::new(Url::parse(DEFAULT_API_BASE).unwrap(), "tt-live-key");
        let printed = format!("{client:?}");
        assert!(!printed.contains("tt-live-key"));
        assert!(printed.contains("api.tripletex.no"));
    }

    #[tokio::test]
    async fn submit_posts_below_a_prefixed_base() {
        let router = Router::new().fallback(|uri: axum::http::Uri| async move {
            Json(json!({"status": "success", "path": uri.path()}))
        });
        let base = spawn(router).await.join("tripletex/").unwrap();
        let client = TripletexClient::new(base, "k");

        let resp = client.submit("/v2/invoices", &json!({})).await.unwrap();
        assert_eq!(resp.rest["path"], json!("/tripletex/v2/invoices"));
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let router = Router::new().route(
            "/v2/subscriptions",
            post(|| async { Json(json!({"status": "error", "message": "bad account"})) }),
        );
        let client = TripletexClient::new(spawn(router).await, "k");
        let err = client
            .submit("/v2/subscriptions", &json!({}))
            .await
            .unwrap_err();
        match err {
            ClientError::Rejected { status, .. } => assert_eq!(status.as_deref(), Some("error")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn slow_api_hits_the_timeout() {
        let router = Router::new().route(
            "/v2/invoices",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"status": "success"}))
            }),
        );
        let client = TripletexClient::new(spawn(router).await, "k")
            .with_timeout(Some(Duration::from_millis(100)));
        let err = client.submit("/v2/invoices", &json!({})).await.unwrap_err();
        match err {
            ClientError::Http(e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_json_error() {
        let router = Router::new().route("/v2/invoices", post(|| async { "<html>oops</html>" }));
        let client = TripletexClient::new(spawn(router).await, "k");
        let err = client.submit("/v2/invoices", &json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }
}
