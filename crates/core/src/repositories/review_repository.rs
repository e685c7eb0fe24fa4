use rentahan_primitives::error::ReviewError;
use rentahan_primitives::models::review::Review;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Review store. Uniqueness of (booking, author, subject kind) is enforced
/// under the write lock so two racing submissions cannot both land.
#[derive(Default)]
pub struct ReviewRepository {
    reviews: RwLock<Vec<Review>>,
}

impl ReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Review>> {
        self.reviews.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Review>> {
        self.reviews.write().unwrap_or_else(|p| p.into_inner())
    }

    pub fn insert_unique(&self, review: Review) -> Result<Review, ReviewError> {
        let mut reviews = self.write();

        let duplicate = reviews.iter().any(|existing| {
            existing.booking_id == review.booking_id
                && existing.author_id == review.author_id
                && existing.subject_kind == review.subject_kind
        });
        if duplicate {
            return Err(ReviewError::DuplicateReview {
                subject_kind: review.subject_kind,
            });
        }

        reviews.push(review.clone());
        Ok(review)
    }

    pub fn for_subject(&self, subject_id: Uuid) -> Vec<Review> {
        self.read()
            .iter()
            .filter(|review| review.subject_id == subject_id)
            .cloned()
            .collect()
    }

    pub fn for_booking(&self, booking_id: Uuid) -> Vec<Review> {
        self.read()
            .iter()
            .filter(|review| review.booking_id == booking_id)
            .cloned()
            .collect()
    }
}
