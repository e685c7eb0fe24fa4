use crate::models::entities::enum_types::SubjectKind;
use crate::models::entities::review::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitReviewRequest {
    pub author_id: Uuid,

    #[schema(example = "owner")]
    pub subject_kind: SubjectKind,

    #[validate(range(min = 1, max = 5))]
    pub rating: u8,

    #[validate(length(max = 500))]
    pub text: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub author_id: Uuid,
    pub subject_id: Uuid,
    pub subject_kind: SubjectKind,
    pub rating: u8,
    pub text: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            booking_id: review.booking_id,
            author_id: review.author_id,
            subject_id: review.subject_id,
            subject_kind: review.subject_kind,
            rating: review.rating,
            text: review.text,
            tags: review.tags,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AverageRatingResponse {
    pub subject_id: Uuid,
    /// `null` when the subject has no reviews yet — deliberately not zero.
    pub average: Option<f64>,
    pub count: usize,
}
