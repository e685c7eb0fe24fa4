use crate::models::entities::booking::{Booking, TransitionRecord};
use crate::models::entities::enum_types::BookingState;
use crate::models::money::Money;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub listing_id: Uuid,
    pub renter_id: Uuid,
    #[schema(example = "2025-10-28")]
    pub start_date: NaiveDate,
    #[schema(example = "2025-10-29")]
    pub end_date: NaiveDate,
}

/// Body for every lifecycle transition. `expected_version` is an optional
/// optimistic-concurrency check; a stale value is rejected with 409.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransitionRequest {
    pub actor_id: Uuid,
    pub expected_version: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransitionDto {
    pub from: BookingState,
    pub to: BookingState,
    pub actor_id: Uuid,
    pub at: DateTime<Utc>,
}

impl From<TransitionRecord> for TransitionDto {
    fn from(record: TransitionRecord) -> Self {
        Self {
            from: record.from,
            to: record.to,
            actor_id: record.actor_id,
            at: record.at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub owner_id: Uuid,
    pub renter_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rental_days: i64,
    pub daily_rate: Money,
    pub rental_subtotal: Money,
    pub platform_fee: Money,
    pub owner_earning: Money,
    pub deposit_amount: Money,
    pub state: BookingState,
    pub version: i64,
    pub history: Vec<TransitionDto>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            listing_id: booking.listing_id,
            owner_id: booking.owner_id,
            renter_id: booking.renter_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            rental_days: booking.rental_days(),
            daily_rate: booking.daily_rate,
            rental_subtotal: booking.rental_subtotal,
            platform_fee: booking.platform_fee,
            owner_earning: booking.owner_earning,
            deposit_amount: booking.deposit_amount,
            state: booking.state,
            version: booking.version,
            history: booking.history.into_iter().map(TransitionDto::from).collect(),
            created_at: booking.created_at,
        }
    }
}
