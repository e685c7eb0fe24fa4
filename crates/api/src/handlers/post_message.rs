use axum::extract::{Json, Path, State};
use rentahan_core::services::chat_service::ChatService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{MessageDto, PostMessageRequest};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/messages",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id")
    ),
    request_body = PostMessageRequest,
    responses(
        (status = 200, description = "Message stored", body = MessageDto),
        (status = 400, description = "Blocked by the content guard, or invalid input"),
        (status = 404, description = "Booking not found")
    ),
    tag = "Chat"
)]
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<PostMessageRequest>,
) -> Result<Json<MessageDto>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = ChatService::post_message(&state, booking_id, req).await?;
    Ok(Json(response))
}
