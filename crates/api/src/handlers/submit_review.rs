use axum::extract::{Json, Path, State};
use rentahan_core::services::review_service::ReviewService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{ReviewResponse, SubmitReviewRequest};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/reviews",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id")
    ),
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, description = "Review stored", body = ReviewResponse),
        (status = 400, description = "Invalid rating or unknown tag"),
        (status = 403, description = "Author may not review this subject"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking not completed, or review already exists")
    ),
    tag = "Reviews"
)]
pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<SubmitReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = ReviewService::submit(&state, booking_id, req).await?;
    Ok(Json(response))
}
