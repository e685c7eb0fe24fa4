use axum::extract::{Json, Path, State};
use rentahan_core::services::chat_service::ChatService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::MessagesResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}/messages",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Conversation history, oldest first", body = MessagesResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = "Chat"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let response = ChatService::list_messages(&state, booking_id).await?;
    Ok(Json(response))
}
