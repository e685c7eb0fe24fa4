use axum::extract::{Json, Path, State};
use rentahan_core::services::booking_service::BookingService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{BookingResponse, TransitionRequest};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/accept",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id")
    ),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Booking accepted, rental charged and deposit held", body = BookingResponse),
        (status = 403, description = "Actor is not the owner"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Wrong state or stale version"),
        (status = 422, description = "Renter has insufficient funds")
    ),
    tag = "Bookings"
)]
pub async fn accept_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let response = BookingService::accept(&state, booking_id, req).await?;
    Ok(Json(response))
}
