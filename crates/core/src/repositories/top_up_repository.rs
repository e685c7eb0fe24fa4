use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::top_up::TopUp;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Top-up payment intents, keyed by gateway reference. Idempotency lives
/// here: one (account, idempotency key) pair maps to exactly one intent, so
/// a retried request can never create a second charge.
#[derive(Default)]
pub struct TopUpRepository {
    top_ups: Mutex<HashMap<Uuid, TopUp>>,
}

impl TopUpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<Uuid, TopUp>> {
        self.top_ups.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Return the existing intent for this (account, key), or insert the one
    /// produced by `build`. The bool reports whether an insert happened.
    pub fn find_or_create<F>(&self, account_id: Uuid, idempotency_key: &str, build: F) -> (TopUp, bool)
    where
        F: FnOnce() -> TopUp,
    {
        let mut top_ups = self.guard();

        if let Some(existing) = top_ups
            .values()
            .find(|t| t.account_id == account_id && t.idempotency_key == idempotency_key)
        {
            return (existing.clone(), false);
        }

        let top_up = build();
        top_ups.insert(top_up.reference, top_up.clone());
        (top_up, true)
    }

    pub fn find_by_reference(&self, reference: Uuid) -> Option<TopUp> {
        self.guard().get(&reference).cloned()
    }

    /// Mutate an intent through a draft copy; the stored intent is replaced
    /// only if the closure succeeds. Ledger credits performed inside commit
    /// together with the state change. Lock order is top-ups, then wallets.
    pub fn update_with<F>(&self, reference: Uuid, f: F) -> Result<TopUp, ApiError>
    where
        F: FnOnce(&mut TopUp) -> Result<(), ApiError>,
    {
        let mut top_ups = self.guard();

        let current = top_ups
            .get_mut(&reference)
            .ok_or_else(|| ApiError::NotFound(format!("top-up {} not found", reference)))?;

        let mut draft = current.clone();
        f(&mut draft)?;

        *current = draft.clone();
        Ok(draft)
    }
}
