use crate::app_state::AppState;
use crate::content_guard::{self, Verdict};
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{
    chat_dto::{MessageDto, MessagesResponse, PostMessageRequest},
    chat_message::ChatMessage,
    enum_types::MessageKind,
};
use tracing::info;
use uuid::Uuid;

pub struct ChatService;

impl ChatService {
    /// Accept a user message into a booking's conversation. The content
    /// guard runs first; a blocked message is never stored.
    pub async fn post_message(
        state: &AppState,
        booking_id: Uuid,
        req: PostMessageRequest,
    ) -> Result<MessageDto, ApiError> {
        let booking = state.bookings.find(booking_id)?;

        if !booking.is_party(req.sender_id) {
            return Err(ApiError::BadRequest(
                "Only the booking's owner or renter may send messages".into(),
            ));
        }

        let kind = req.kind.unwrap_or(MessageKind::Text);
        if kind == MessageKind::System {
            return Err(ApiError::BadRequest(
                "System messages cannot be posted directly".into(),
            ));
        }

        match content_guard::validate(&req.body) {
            Verdict::Blocked(reason) => {
                info!("chat.message: blocked on booking {} ({:?})", booking_id, reason);
                Err(ApiError::MessageBlocked(reason.to_string()))
            }
            Verdict::Allowed => {
                let message = state.messages.append(ChatMessage::from_user(
                    booking_id,
                    req.sender_id,
                    &req.body,
                    kind,
                ));
                Ok(message.into())
            }
        }
    }

    pub async fn list_messages(
        state: &AppState,
        booking_id: Uuid,
    ) -> Result<MessagesResponse, ApiError> {
        state.bookings.find(booking_id)?;

        let messages = state
            .messages
            .for_booking(booking_id)
            .into_iter()
            .map(MessageDto::from)
            .collect();
        Ok(MessagesResponse { messages })
    }

    /// Internally generated lifecycle note. Bypasses the content guard by
    /// construction and carries no sender.
    pub fn system_message(state: &AppState, booking_id: Uuid, body: String) {
        state.messages.append(ChatMessage::system(booking_id, body));
    }
}
