use crate::models::entities::enum_types::SubjectKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Tags a reviewer may attach to the person on the other side of a booking.
pub const PERSON_TAGS: &[&str] = &[
    "Friendly",
    "Responsive",
    "Easy to coordinate with",
    "Respectful",
    "Helpful",
];

/// Tags for the rented item itself.
pub const ITEM_TAGS: &[&str] = &[
    "Good Condition",
    "As Described",
    "Useful",
    "Clean",
    "Well-maintained",
];

pub fn allowed_tags(kind: SubjectKind) -> &'static [&'static str] {
    match kind {
        SubjectKind::Owner | SubjectKind::Renter => PERSON_TAGS,
        SubjectKind::Item => ITEM_TAGS,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Review {
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
