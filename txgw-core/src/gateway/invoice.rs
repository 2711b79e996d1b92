use txgw_sdk::config::ExtensionMetadata;
use txgw_sdk::objects::{Currency, EntityKind, EntityStatus, InvoicePayload};

use super::{Account, GatewayKind, PaymentRequest};
use crate::webhook::{EventRule, StatusRule};

/// One-shot invoice payments ("Tripletex Faktura").
#[derive(Debug, Clone, Copy, Default)]
pub struct Invoice;

pub static INVOICE_RULES: [EventRule; 3] = [
    EventRule::new("invoice_created", StatusRule::When(&[("paid", EntityStatus::Paid)])),
    EventRule::new("invoice_paid", StatusRule::When(&[("paid", EntityStatus::Paid)])),
    EventRule::new("invoice_canceled", StatusRule::Always(EntityStatus::Canceled)),
];

impl GatewayKind for Invoice {
    type Payload = InvoicePayload;

    const ENDPOINT: &'static str = "/v2/invoices";
    const ENTITY: EntityKind = EntityKind::Invoice;

    fn metadata() -> ExtensionMetadata {
        ExtensionMetadata {
            display_name: "Tripletex Faktura",
            version: env!("CARGO_PKG_VERSION"),
            author: "txgw",
            website: "https://www.tripletex.no",
        }
    }

    fn event_rules() -> &'static [EventRule] {
        &INVOICE_RULES
    }

    fn build_payload(&self, request: &PaymentRequest, account: &Account) -> InvoicePayload {
        InvoicePayload {
            invoice_id: request.invoice_id().clone(),
            amount: request.amount(),
            account_id: account.account_id.clone(),
            test_mode: account.test_mode,
            currency: Currency::Nok,
        }
    }
}
