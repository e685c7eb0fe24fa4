use crate::models::entities::enum_types::TransactionKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One ledger entry. Immutable once appended; the signed amount carries the
/// direction (top-ups, releases and payouts positive, payments, holds and
/// fees negative).
#[derive(Debug, Clone, Serialize)]
pub struct WalletTransaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Entry to be appended; id and timestamp are assigned at apply time.
#[derive(Debug, Clone)]
pub struct NewWalletTransaction {
    pub kind: TransactionKind,
    pub amount: i64,
    pub booking_id: Option<Uuid>,
}

impl NewWalletTransaction {
    pub fn new(kind: TransactionKind, amount: i64, booking_id: Option<Uuid>) -> Self {
        Self {
            kind,
            amount,
            booking_id,
        }
    }
}

/// A wallet account: cached running balance plus the append-only log it must
/// always equal. A frozen account refuses all further writes.
#[derive(Debug, Clone, Serialize)]
pub struct WalletAccount {
    pub id: Uuid,
    pub balance: i64,
    pub transactions: Vec<WalletTransaction>,
    pub frozen: bool,
    pub created_at: DateTime<Utc>,
}

impl WalletAccount {
    pub fn open(id: Uuid) -> Self {
        Self {
            id,
            balance: 0,
            transactions: Vec::new(),
            frozen: false,
            created_at: Utc::now(),
        }
    }

    pub fn log_sum(&self) -> i64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }
}
