use crate::models::entities::enum_types::{PaymentProvider, PaymentState, TransactionKind};
use crate::models::entities::top_up::TopUp;
use crate::models::entities::wallet::WalletTransaction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct TopUpRequest {
    /// Amount in centavos.
    #[validate(range(min = 1, max = 100_000_000))]
    pub amount: i64,

    #[schema(example = "gcash")]
    pub provider: PaymentProvider,

    #[validate(length(min = 8, max = 128))]
    pub idempotency_key: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopUpResponse {
    pub transaction_id: Uuid,
    pub state: PaymentState,
    pub requires_otp: bool,
    pub amount: i64,
    pub provider_reference: Option<String>,
}

impl From<&TopUp> for TopUpResponse {
    fn from(top_up: &TopUp) -> Self {
        Self {
            transaction_id: top_up.reference,
            state: top_up.state,
            requires_otp: top_up.state == PaymentState::RequiresAction,
            amount: top_up.amount.centavos(),
            provider_reference: top_up.provider_reference.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfirmTopUpRequest {
    pub reference: Uuid,
    #[schema(example = "123456")]
    pub otp_code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WalletResponse {
    pub account_id: Uuid,
    /// Balance in centavos.
    pub balance: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WalletTransactionDto {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<WalletTransaction> for WalletTransactionDto {
    fn from(tx: WalletTransaction) -> Self {
        Self {
            id: tx.id,
            kind: tx.kind,
            amount: tx.amount,
            booking_id: tx.booking_id,
            created_at: tx.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransactionsResponse {
    pub transactions: Vec<WalletTransactionDto>,
}
