use txgw_sdk::config::ExtensionMetadata;
use txgw_sdk::objects::{Currency, EntityKind, EntityStatus, Interval, SubscriptionPayload};

use super::{Account, GatewayKind, PaymentRequest};
use crate::webhook::{EventRule, StatusRule};

/// Recurring payments ("Tripletex Subscription").
#[derive(Debug, Clone, Copy, Default)]
pub struct Subscription {
    pub interval: Interval,
}

pub static SUBSCRIPTION_RULES: [EventRule; 3] = [
    EventRule::new(
        "subscription_created",
        StatusRule::When(&[("active", EntityStatus::Active)]),
    ),
    EventRule::new(
        "subscription_updated",
        StatusRule::When(&[
            ("active", EntityStatus::Active),
            ("inactive", EntityStatus::Inactive),
        ]),
    ),
    EventRule::new("subscription_canceled", StatusRule::Always(EntityStatus::Canceled)),
];

impl GatewayKind for Subscription {
    type Payload = SubscriptionPayload;

    const ENDPOINT: &'static str = "/v2/subscriptions";
    const ENTITY: EntityKind = EntityKind::Subscription;

    fn metadata() -> ExtensionMetadata {
        ExtensionMetadata {
            display_name: "Tripletex Subscription",
            version: env!("CARGO_PKG_VERSION"),
            author: "txgw",
            website: "https://www.tripletex.no",
        }
    }

    fn event_rules() -> &'static [EventRule] {
        &SUBSCRIPTION_RULES
    }

    fn build_payload(&self, request: &PaymentRequest, account: &Account) -> SubscriptionPayload {
        SubscriptionPayload {
            invoice_id: request.invoice_id().clone(),
            amount: request.amount(),
            account_id: account.account_id.clone(),
            test_mode: account.test_mode,
            recurring: true,
            interval: self.interval,
            currency: Currency::Nok,
        }
    }
}
