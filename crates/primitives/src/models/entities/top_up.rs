use crate::models::entities::enum_types::{PaymentProvider, PaymentState};
use crate::models::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A top-up payment intent against the external gateway. Distinct from the
/// ledger entry it produces: the intent tracks the gateway/OTP round-trip,
/// the ledger records the credit once the gateway confirms.
#[derive(Debug, Clone, Serialize)]
pub struct TopUp {
    pub id: Uuid,
    pub account_id: Uuid,
    pub amount: Money,
    pub provider: PaymentProvider,
    pub state: PaymentState,
    pub idempotency_key: String,
    pub reference: Uuid,
    pub provider_reference: Option<String>,
    pub otp_reference: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TopUp {
    pub fn new(
        account_id: Uuid,
        amount: Money,
        provider: PaymentProvider,
        idempotency_key: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            amount,
            provider,
            state: PaymentState::Pending,
            idempotency_key: idempotency_key.to_string(),
            reference: Uuid::new_v4(),
            provider_reference: None,
            otp_reference: None,
            created_at: now,
            updated_at: now,
        }
    }
}
