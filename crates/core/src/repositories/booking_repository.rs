use rentahan_primitives::error::{ApiError, BookingError};
use rentahan_primitives::models::booking::Booking;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Booking store. All mutation goes through [`BookingRepository::update_with`],
/// which holds the write lock for the whole transition so two transitions on
/// one booking can never interleave (single-writer-per-booking).
#[derive(Default)]
pub struct BookingRepository {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Booking>> {
        self.bookings.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Booking>> {
        self.bookings.write().unwrap_or_else(|p| p.into_inner())
    }

    /// Insert a new booking unless its date range overlaps a non-terminal
    /// booking for the same listing. Conflict check and insert run under one
    /// write lock so two racing requests cannot both slip in.
    pub fn insert_if_available(&self, booking: Booking) -> Result<Booking, BookingError> {
        let mut bookings = self.write();

        let conflict = bookings.values().any(|existing| {
            existing.listing_id == booking.listing_id
                && !existing.state.is_terminal()
                && existing.overlaps(booking.start_date, booking.end_date)
        });
        if conflict {
            return Err(BookingError::DateConflict {
                listing_id: booking.listing_id,
                start: booking.start_date,
                end: booking.end_date,
            });
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    pub fn find(&self, id: Uuid) -> Result<Booking, BookingError> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(BookingError::NotFound(id))
    }

    /// Run a transition against a draft copy of the booking; the stored
    /// booking is replaced only if the closure succeeds. Ledger writes
    /// performed inside the closure therefore commit together with the state
    /// change or not at all. Lock order is bookings, then wallets, then
    /// messages; never the reverse.
    pub fn update_with<F>(&self, id: Uuid, f: F) -> Result<Booking, ApiError>
    where
        F: FnOnce(&mut Booking) -> Result<(), ApiError>,
    {
        let mut bookings = self.write();

        let current = bookings.get_mut(&id).ok_or(BookingError::NotFound(id))?;

        let mut draft = current.clone();
        f(&mut draft)?;

        *current = draft.clone();
        Ok(draft)
    }
}
