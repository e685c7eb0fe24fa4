use axum::extract::{Json, Path, State};
use rentahan_core::services::booking_service::BookingService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::BookingResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking details", body = BookingResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let response = BookingService::get(&state, booking_id).await?;
    Ok(Json(response))
}
