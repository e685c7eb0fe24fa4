use crate::models::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Read-only catalog entry. The catalog is an external collaborator in the
/// real product; here it is seeded at startup and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub category: String,
    pub daily_rate: Money,
    pub deposit_amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub fn new(
        owner_id: Uuid,
        name: &str,
        category: &str,
        daily_rate: Money,
        deposit_amount: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.to_string(),
            category: category.to_string(),
            daily_rate,
            deposit_amount,
            created_at: Utc::now(),
        }
    }
}
