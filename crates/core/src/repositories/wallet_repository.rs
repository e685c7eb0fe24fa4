use rentahan_primitives::error::LedgerError;
use rentahan_primitives::models::enum_types::TransactionKind;
use rentahan_primitives::models::wallet::{NewWalletTransaction, WalletAccount, WalletTransaction};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::error;
use uuid::Uuid;

/// Append-only wallet ledger. One mutex guards every account, so a batch of
/// entries — even across accounts — commits as a single critical section
/// (single-writer-per-account, and no partial cross-account writes).
#[derive(Default)]
pub struct WalletRepository {
    accounts: Mutex<HashMap<Uuid, WalletAccount>>,
}

impl WalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<Uuid, WalletAccount>> {
        self.accounts.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Open the account if it does not exist yet. Wallets have no explicit
    /// registration step; first use creates them.
    pub fn ensure_account(&self, account_id: Uuid) {
        self.guard()
            .entry(account_id)
            .or_insert_with(|| WalletAccount::open(account_id));
    }

    pub fn balance(&self, account_id: Uuid) -> Result<i64, LedgerError> {
        self.guard()
            .get(&account_id)
            .map(|account| account.balance)
            .ok_or(LedgerError::AccountNotFound(account_id))
    }

    pub fn transactions(&self, account_id: Uuid) -> Result<Vec<WalletTransaction>, LedgerError> {
        self.guard()
            .get(&account_id)
            .map(|account| account.transactions.clone())
            .ok_or(LedgerError::AccountNotFound(account_id))
    }

    pub fn apply(&self, account_id: Uuid, entry: NewWalletTransaction) -> Result<i64, LedgerError> {
        let balances = self.apply_batches(vec![(account_id, vec![entry])])?;
        Ok(balances[0])
    }

    /// Append every entry of every batch, or none of them.
    ///
    /// Validation runs over all batches first: a frozen account or a
    /// `RentalPayment` debit that would drive its account negative rejects
    /// the whole call before anything is written. Only `RentalPayment` is
    /// balance-checked; holds, releases, top-ups, payouts and fees are
    /// unconditional.
    pub fn apply_batches(
        &self,
        batches: Vec<(Uuid, Vec<NewWalletTransaction>)>,
    ) -> Result<Vec<i64>, LedgerError> {
        let mut accounts = self.guard();

        for (account_id, entries) in &batches {
            let account = accounts
                .entry(*account_id)
                .or_insert_with(|| WalletAccount::open(*account_id));

            if account.frozen {
                return Err(LedgerError::AccountFrozen(*account_id));
            }

            let mut projected = account.balance;
            for entry in entries {
                projected += entry.amount;
                if entry.kind == TransactionKind::RentalPayment
                    && entry.amount < 0
                    && projected < 0
                {
                    return Err(LedgerError::InsufficientFunds {
                        balance: account.balance,
                        debit: -entry.amount,
                    });
                }
            }
        }

        let now = Utc::now();
        let mut balances = Vec::with_capacity(batches.len());

        for (account_id, entries) in batches {
            let account = accounts
                .get_mut(&account_id)
                .ok_or(LedgerError::AccountNotFound(account_id))?;

            for entry in entries {
                account.transactions.push(WalletTransaction {
                    id: Uuid::new_v4(),
                    kind: entry.kind,
                    amount: entry.amount,
                    booking_id: entry.booking_id,
                    created_at: now,
                });
                account.balance += entry.amount;
            }

            // The cached balance and the log must never diverge. If they do,
            // freeze the account: no further writes until an operator looks.
            let summed = account.log_sum();
            if summed != account.balance {
                account.frozen = true;
                error!(
                    %account_id,
                    cached = account.balance,
                    summed,
                    "ledger corruption: cached balance diverged from transaction log"
                );
                return Err(LedgerError::Corruption {
                    account_id,
                    cached: account.balance,
                    summed,
                });
            }

            balances.push(account.balance);
        }

        Ok(balances)
    }
}
