use axum::extract::{Json, Path, State};
use rentahan_core::services::wallet_service::WalletService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{TopUpRequest, TopUpResponse};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/wallets/{account_id}/top_up",
    params(
        ("account_id" = Uuid, Path, description = "Wallet account id")
    ),
    request_body = TopUpRequest,
    responses(
        (status = 200, description = "Top-up completed or awaiting OTP", body = TopUpResponse),
        (status = 400, description = "Invalid input"),
        (status = 502, description = "Payment gateway or OTP service unavailable")
    ),
    tag = "Wallet"
)]
pub async fn top_up(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<Uuid>,
    Json(req): Json<TopUpRequest>,
) -> Result<Json<TopUpResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = WalletService::initiate_top_up(&state, account_id, req).await?;
    Ok(Json(response))
}
