use axum::extract::{Json, Path, State};
use rentahan_core::services::wallet_service::WalletService;
use rentahan_core::AppState;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::TransactionsResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/wallets/{account_id}/transactions",
    params(
        ("account_id" = Uuid, Path, description = "Wallet account id")
    ),
    responses(
        (status = 200, description = "Ledger entries, oldest first", body = TransactionsResponse)
    ),
    tag = "Wallet"
)]
pub async fn get_wallet_transactions(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let response = WalletService::list_transactions(&state, account_id).await?;
    Ok(Json(response))
}
