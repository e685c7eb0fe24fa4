use axum::extract::{Json, State};
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{ListingDto, ListingsResponse};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/listings",
    responses(
        (status = 200, description = "All catalog listings", body = ListingsResponse)
    ),
    tag = "Listings"
)]
pub async fn get_listings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListingsResponse>, ApiError> {
    let listings = state
        .listings
        .all()
        .into_iter()
        .map(ListingDto::from)
        .collect();

    Ok(Json(ListingsResponse { listings }))
}
