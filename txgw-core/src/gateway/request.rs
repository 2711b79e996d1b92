use rust_decimal::Decimal;
use txgw_sdk::objects::{ExternalId, LineItem, PayRequest};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
}

/// A validated payment to create.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    amount: Decimal,
    items: Vec<LineItem>,
    invoice_id: ExternalId,
}

impl PaymentRequest {
    pub fn new(
        amount: Decimal,
        items: Vec<LineItem>,
        invoice_id: ExternalId,
    ) -> Result<Self, PaymentError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PaymentError::NegativeAmount(amount));
        }
        Ok(Self {
            amount,
            items,
            invoice_id,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn invoice_id(&self) -> &ExternalId {
        &self.invoice_id
    }
}

impl TryFrom<PayRequest> for PaymentRequest {
    type Error = PaymentError;

    fn try_from(value: PayRequest) -> Result<Self, Self::Error> {
        Self::new(value.total, value.products, value.invoice_id)
    }
}
