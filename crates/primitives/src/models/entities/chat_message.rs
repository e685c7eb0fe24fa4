use crate::models::entities::enum_types::MessageKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A message in a booking's conversation. User messages must have passed the
/// content guard before construction; system messages are generated
/// internally and carry no sender.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub body: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_user(booking_id: Uuid, sender_id: Uuid, body: &str, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id,
            sender_id: Some(sender_id),
            body: body.to_string(),
            kind,
            created_at: Utc::now(),
        }
    }

    pub fn system(booking_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id,
            sender_id: None,
            body,
            kind: MessageKind::System,
            created_at: Utc::now(),
        }
    }
}
