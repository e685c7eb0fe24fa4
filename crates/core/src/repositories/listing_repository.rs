use rentahan_primitives::models::listing::Listing;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Read-only listing catalog, seeded once at startup.
#[derive(Default)]
pub struct ListingRepository {
    listings: RwLock<HashMap<Uuid, Listing>>,
}

impl ListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Listing>> {
        self.listings.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Listing>> {
        self.listings.write().unwrap_or_else(|p| p.into_inner())
    }

    pub fn insert(&self, listing: Listing) {
        self.write().insert(listing.id, listing);
    }

    pub fn find(&self, id: Uuid) -> Option<Listing> {
        self.read().get(&id).cloned()
    }

    pub fn all(&self) -> Vec<Listing> {
        let mut listings: Vec<Listing> = self.read().values().cloned().collect();
        listings.sort_by(|a, b| a.name.cmp(&b.name));
        listings
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }
}
