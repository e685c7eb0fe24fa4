use axum::extract::{Json, Path, State};
use rentahan_core::services::wallet_service::WalletService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::WalletResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/wallets/{account_id}",
    params(
        ("account_id" = Uuid, Path, description = "Wallet account id")
    ),
    responses(
        (status = 200, description = "Current balance", body = WalletResponse)
    ),
    tag = "Wallet"
)]
pub async fn get_wallet(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<WalletResponse>, ApiError> {
    let response = WalletService::get_wallet(&state, account_id).await?;
    Ok(Json(response))
}
