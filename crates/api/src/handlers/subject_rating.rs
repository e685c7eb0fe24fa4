use axum::extract::{Json, Path, State};
use rentahan_core::services::review_service::ReviewService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::AverageRatingResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/reviews/{subject_id}/average",
    params(
        ("subject_id" = Uuid, Path, description = "User or listing id being rated")
    ),
    responses(
        (status = 200, description = "Mean star rating, null when unreviewed", body = AverageRatingResponse)
    ),
    tag = "Reviews"
)]
pub async fn subject_rating(
    State(state): State<Arc<AppState>>,
    Path(subject_id): Path<Uuid>,
) -> Result<Json<AverageRatingResponse>, ApiError> {
    let response = ReviewService::average_rating(&state, subject_id).await?;
    Ok(Json(response))
}
