use axum::extract::{Json, Path, State};
use rentahan_core::services::booking_service::BookingService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{BookingResponse, TransitionRequest};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id")
    ),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Booking cancelled; any holds reversed", body = BookingResponse),
        (status = 403, description = "Actor is not a party to the booking"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is already active or closed")
    ),
    tag = "Bookings"
)]
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let response = BookingService::cancel(&state, booking_id, req).await?;
    Ok(Json(response))
}
