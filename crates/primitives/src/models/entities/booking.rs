use crate::error::BookingError;
use crate::models::entities::enum_types::{BookingState, Role};
use crate::models::entities::listing::Listing;
use crate::models::money::Money;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct TransitionRecord {
    pub from: BookingState,
    pub to: BookingState,
    pub actor_id: Uuid,
    pub at: DateTime<Utc>,
}

/// A single rental agreement between one owner and one renter over an
/// inclusive date range. Money figures are fixed at request time from the
/// listing's rate and the platform fee in force.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub owner_id: Uuid,
    pub renter_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_rate: Money,
    pub deposit_amount: Money,
    pub platform_fee_bps: i64,
    pub rental_subtotal: Money,
    pub platform_fee: Money,
    pub owner_earning: Money,
    pub state: BookingState,
    pub version: i64,
    pub history: Vec<TransitionRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn request(
        listing: &Listing,
        renter_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        platform_fee_bps: i64,
    ) -> Result<Self, BookingError> {
        if start_date > end_date {
            return Err(BookingError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let days = rental_days(start_date, end_date);
        let rental_subtotal = listing.daily_rate.times(days);
        let platform_fee = rental_subtotal.fee_portion(platform_fee_bps);
        let owner_earning = rental_subtotal
            .checked_sub(platform_fee)
            .unwrap_or(Money::ZERO);

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            listing_id: listing.id,
            owner_id: listing.owner_id,
            renter_id,
            start_date,
            end_date,
            daily_rate: listing.daily_rate,
            deposit_amount: listing.deposit_amount,
            platform_fee_bps,
            rental_subtotal,
            platform_fee,
            owner_earning,
            state: BookingState::Requested,
            version: 0,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn rental_days(&self) -> i64 {
        rental_days(self.start_date, self.end_date)
    }

    pub fn role_of(&self, user_id: Uuid) -> Option<Role> {
        if user_id == self.owner_id {
            Some(Role::Owner)
        } else if user_id == self.renter_id {
            Some(Role::Renter)
        } else {
            None
        }
    }

    pub fn is_party(&self, user_id: Uuid) -> bool {
        self.role_of(user_id).is_some()
    }

    /// Inclusive-range overlap against another requested period.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }

    /// Apply a validated transition: state, version, history and timestamp
    /// move together so a booking snapshot is always internally consistent.
    pub fn record_transition(&mut self, to: BookingState, actor_id: Uuid) {
        let now = Utc::now();
        self.history.push(TransitionRecord {
            from: self.state,
            to,
            actor_id,
            at: now,
        });
        self.state = to;
        self.version += 1;
        self.updated_at = now;
    }
}

/// Rental periods include both endpoints: Oct 28 to Oct 29 is a 2-day rental.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing::new(
            Uuid::new_v4(),
            "Power Drill",
            "Tools",
            Money::new(25_000).unwrap(),
            Money::new(100_000).unwrap(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn two_day_rental_money_breakdown() {
        let booking = Booking::request(
            &listing(),
            Uuid::new_v4(),
            date(2025, 10, 28),
            date(2025, 10, 29),
            1_000,
        )
        .unwrap();

        assert_eq!(booking.rental_days(), 2);
        assert_eq!(booking.rental_subtotal.centavos(), 50_000);
        assert_eq!(booking.platform_fee.centavos(), 5_000);
        assert_eq!(booking.owner_earning.centavos(), 45_000);
        assert_eq!(booking.deposit_amount.centavos(), 100_000);
    }

    #[test]
    fn rejects_reversed_range() {
        let err = Booking::request(
            &listing(),
            Uuid::new_v4(),
            date(2025, 10, 29),
            date(2025, 10, 28),
            1_000,
        )
        .unwrap_err();
        assert!(matches!(err, BookingError::InvalidDateRange { .. }));
    }

    #[test]
    fn single_day_rental_counts_one_day() {
        let booking = Booking::request(
            &listing(),
            Uuid::new_v4(),
            date(2025, 11, 1),
            date(2025, 11, 1),
            1_000,
        )
        .unwrap();
        assert_eq!(booking.rental_days(), 1);
    }

    #[test]
    fn overlap_is_inclusive_of_endpoints() {
        let booking = Booking::request(
            &listing(),
            Uuid::new_v4(),
            date(2025, 10, 28),
            date(2025, 10, 30),
            1_000,
        )
        .unwrap();

        assert!(booking.overlaps(date(2025, 10, 30), date(2025, 11, 2)));
        assert!(booking.overlaps(date(2025, 10, 26), date(2025, 10, 28)));
        assert!(!booking.overlaps(date(2025, 10, 31), date(2025, 11, 2)));
    }

    #[test]
    fn transition_bumps_version_and_history() {
        let mut booking = Booking::request(
            &listing(),
            Uuid::new_v4(),
            date(2025, 10, 28),
            date(2025, 10, 29),
            1_000,
        )
        .unwrap();
        let owner = booking.owner_id;

        booking.record_transition(BookingState::Accepted, owner);
        assert_eq!(booking.state, BookingState::Accepted);
        assert_eq!(booking.version, 1);
        assert_eq!(booking.history.len(), 1);
        assert_eq!(booking.history[0].from, BookingState::Requested);
    }
}
