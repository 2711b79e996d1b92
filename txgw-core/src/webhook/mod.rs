//! Webhook receiver: signature check, then table-driven dispatch.
//!
//! ```text
//! received ──verify──▶ signature-verified ──dispatch──▶ host update / ignored
//!     └──────────────▶ rejected
//! ```
//!
//! Only a failed signature is reported as a rejection. Everything after
//! verification, including unknown events and host callback failures, is
//! acknowledged so Tripletex does not treat new event types as errors.

mod rules;

pub use rules::{EventRule, StatusRule, find_rule};

use txgw_sdk::objects::{EntityKind, EntityStatus, ExternalId, WebhookEnvelope};
use txgw_sdk::signature::{self, SignatureError};

use crate::gateway::GatewayKind;
use crate::updaters::StatusUpdater;

/// Why a verified delivery caused no update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Body is not a JSON object of the expected loose shape.
    MalformedBody(String),
    /// No `event` field.
    MissingEvent,
    /// Event name not in this gateway's table.
    UnknownEvent(String),
    /// The nested invoice/subscription object is absent or unreadable, or
    /// its id is not a single JSON value.
    MissingEntity { event: &'static str },
}

/// Result of handling one webhook delivery.
#[derive(Debug)]
pub enum WebhookOutcome {
    /// Signature check failed; nothing else was looked at.
    Rejected(SignatureError),
    Ignored(IgnoreReason),
    /// Known event whose status maps to no update.
    Skipped {
        event: &'static str,
        id: ExternalId,
        status: Option<serde_json::Value>,
    },
    Updated {
        event: &'static str,
        id: ExternalId,
        status: EntityStatus,
    },
    /// The host callback returned an error. Still acknowledged.
    UpdateFailed {
        event: &'static str,
        id: ExternalId,
        status: EntityStatus,
        error: anyhow::Error,
    },
}

impl WebhookOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, WebhookOutcome::Rejected(_))
    }
}

/// Webhook receiver for one gateway.
#[derive(Debug, Clone, Copy)]
pub struct WebhookReceiver {
    entity: EntityKind,
    rules: &'static [EventRule],
}

impl WebhookReceiver {
    pub fn new(entity: EntityKind, rules: &'static [EventRule]) -> Self {
        Self { entity, rules }
    }

    pub fn for_gateway<K: GatewayKind>() -> Self {
        Self::new(K::ENTITY, K::event_rules())
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    /// Verify `body` against `signature_header` and dispatch it.
    ///
    /// Entry point for hosts that receive webhooks outside the bundled axum
    /// server. The server verifies in its extractor with the same
    /// [`signature::verify_body`] and then calls [`dispatch`](Self::dispatch).
    pub async fn handle(
        &self,
        secret: &[u8],
        signature_header: Option<&str>,
        body: &[u8],
        updater: &dyn StatusUpdater,
    ) -> WebhookOutcome {
        if let Err(e) = signature::verify_body(body, signature_header, secret) {
            tracing::warn!(entity = %self.entity, error = %e, "Rejected webhook");
            return WebhookOutcome::Rejected(e);
        }
        self.dispatch(body, updater).await
    }

    /// Dispatch a body whose signature has already been verified.
    pub async fn dispatch(&self, body: &[u8], updater: &dyn StatusUpdater) -> WebhookOutcome {
        match serde_json::from_slice::<WebhookEnvelope>(body) {
            Ok(envelope) => self.dispatch_envelope(envelope, updater).await,
            Err(e) => self.ignore(IgnoreReason::MalformedBody(e.to_string())),
        }
    }

    async fn dispatch_envelope(
        &self,
        envelope: WebhookEnvelope,
        updater: &dyn StatusUpdater,
    ) -> WebhookOutcome {
        let Some(event_name) = envelope.event.as_deref() else {
            return self.ignore(IgnoreReason::MissingEvent);
        };
        let Some(rule) = find_rule(self.rules, event_name) else {
            return self.ignore(IgnoreReason::UnknownEvent(event_name.to_owned()));
        };
        let event = rule.event;

        let entity = match envelope.entity(self.entity) {
            Ok(Some(entity)) if entity.id.is_scalar() => entity,
            Ok(_) => return self.ignore(IgnoreReason::MissingEntity { event }),
            Err(e) => {
                tracing::debug!(event, error = %e, "Unreadable entity in webhook");
                return self.ignore(IgnoreReason::MissingEntity { event });
            }
        };

        let Some(status) = rule.rule.resolve(entity.status_str()) else {
            tracing::debug!(
                event,
                id = %entity.id,
                status = ?entity.status,
                "Webhook status maps to no update"
            );
            return WebhookOutcome::Skipped {
                event,
                id: entity.id,
                status: entity.status,
            };
        };

        match updater.update_status(self.entity, &entity.id, status).await {
            Ok(()) => {
                tracing::info!(
                    event,
                    entity = %self.entity,
                    id = %entity.id,
                    %status,
                    "Status updated"
                );
                WebhookOutcome::Updated {
                    event,
                    id: entity.id,
                    status,
                }
            }
            Err(error) => {
                tracing::error!(
                    event,
                    entity = %self.entity,
                    id = %entity.id,
                    %status,
                    error = %error,
                    "Host status update failed"
                );
                WebhookOutcome::UpdateFailed {
                    event,
                    id: entity.id,
                    status,
                    error,
                }
            }
        }
    }

    fn ignore(&self, reason: IgnoreReason) -> WebhookOutcome {
        match &reason {
            IgnoreReason::UnknownEvent(name) => {
                tracing::warn!(entity = %self.entity, event = %name, "Unhandled event");
            }
            other => {
                tracing::warn!(entity = %self.entity, reason = ?other, "Ignored webhook");
            }
        }
        WebhookOutcome::Ignored(reason)
    }
}
