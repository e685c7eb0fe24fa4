use axum::extract::{Json, State};
use rentahan_core::services::booking_service::BookingService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{BookingResponse, CreateBookingRequest};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking requested", body = BookingResponse),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Listing not found"),
        (status = 409, description = "Dates conflict with an existing booking")
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let response = BookingService::create(&state, req).await?;
    Ok(Json(response))
}
