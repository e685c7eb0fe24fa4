use axum::extract::{Json, Path, State};
use rentahan_core::services::wallet_service::WalletService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{ConfirmTopUpRequest, TopUpResponse};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/wallets/{account_id}/top_up/confirm",
    params(
        ("account_id" = Uuid, Path, description = "Wallet account id")
    ),
    request_body = ConfirmTopUpRequest,
    responses(
        (status = 200, description = "OTP accepted and wallet credited", body = TopUpResponse),
        (status = 400, description = "Malformed or rejected OTP code"),
        (status = 404, description = "Top-up not found"),
        (status = 502, description = "Payment gateway or OTP service unavailable")
    ),
    tag = "Wallet"
)]
pub async fn confirm_top_up(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<Uuid>,
    Json(req): Json<ConfirmTopUpRequest>,
) -> Result<Json<TopUpResponse>, ApiError> {
    let response = WalletService::confirm_top_up(&state, account_id, req).await?;
    Ok(Json(response))
}
