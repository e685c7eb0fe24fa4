use axum::extract::{Json, Path, State};
use rentahan_core::services::booking_service::BookingService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{BookingResponse, TransitionRequest};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/pickup",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id")
    ),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Pickup confirmation recorded; rental becomes active once both parties confirm", body = BookingResponse),
        (status = 403, description = "Actor is not a party to the booking"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Wrong state or stale version")
    ),
    tag = "Bookings"
)]
pub async fn confirm_pickup(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let response = BookingService::confirm_pickup(&state, booking_id, req).await?;
    Ok(Json(response))
}
