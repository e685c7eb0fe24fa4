use crate::app_state::AppState;
use chrono::Utc;
use rentahan_primitives::error::{ApiError, ReviewError};
use rentahan_primitives::models::{
    enum_types::{BookingState, Role, SubjectKind},
    review::{allowed_tags, Review},
    review_dto::{AverageRatingResponse, ReviewResponse, SubmitReviewRequest},
};
use tracing::info;
use uuid::Uuid;

pub struct ReviewService;

impl ReviewService {
    /// Submit one side of a completed booking's two-sided review. The renter
    /// reviews the owner and the item; the owner reviews the renter.
    pub async fn submit(
        state: &AppState,
        booking_id: Uuid,
        req: SubmitReviewRequest,
    ) -> Result<ReviewResponse, ApiError> {
        let booking = state.bookings.find(booking_id)?;

        if booking.state != BookingState::Completed {
            return Err(ReviewError::BookingNotCompleted(booking_id).into());
        }

        let subject_id = match (req.subject_kind, booking.role_of(req.author_id)) {
            (SubjectKind::Owner, Some(Role::Renter)) => booking.owner_id,
            (SubjectKind::Renter, Some(Role::Owner)) => booking.renter_id,
            (SubjectKind::Item, Some(Role::Renter)) => booking.listing_id,
            _ => {
                return Err(ReviewError::WrongReviewer {
                    author_id: req.author_id,
                    subject_kind: req.subject_kind,
                }
                .into())
            }
        };

        let allowed = allowed_tags(req.subject_kind);
        for tag in &req.tags {
            if !allowed.contains(&tag.as_str()) {
                return Err(ReviewError::UnknownTag(tag.clone()).into());
            }
        }

        let review = state.reviews.insert_unique(Review {
            id: Uuid::new_v4(),
            booking_id,
            author_id: req.author_id,
            subject_id,
            subject_kind: req.subject_kind,
            rating: req.rating,
            text: req.text,
            tags: req.tags,
            created_at: Utc::now(),
        })?;

        info!(
            "review.submit: {} review on booking {} by {}",
            review.subject_kind, booking_id, review.author_id
        );
        Ok(review.into())
    }

    /// Mean star rating across every review of this subject; `None` when
    /// there are no reviews rather than a misleading zero.
    pub async fn average_rating(
        state: &AppState,
        subject_id: Uuid,
    ) -> Result<AverageRatingResponse, ApiError> {
        let reviews = state.reviews.for_subject(subject_id);
        let count = reviews.len();
        let average = if count == 0 {
            None
        } else {
            Some(reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / count as f64)
        };

        Ok(AverageRatingResponse {
            subject_id,
            average,
            count,
        })
    }
}
