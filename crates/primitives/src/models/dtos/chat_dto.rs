use crate::models::entities::chat_message::ChatMessage;
use crate::models::entities::enum_types::MessageKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PostMessageRequest {
    pub sender_id: Uuid,

    #[validate(length(min = 1, max = 1000))]
    pub body: String,

    /// Defaults to `text`. `system` is reserved for internally generated
    /// messages and is rejected here.
    pub kind: Option<MessageKind>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub body: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl From<ChatMessage> for MessageDto {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            booking_id: message.booking_id,
            sender_id: message.sender_id,
            body: message.body,
            kind: message.kind,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessagesResponse {
    pub messages: Vec<MessageDto>,
}
