use crate::app_state::AppState;
use chrono::Utc;
use rentahan_primitives::error::ApiError;
use rentahan_primitives::models::{
    enum_types::{PaymentState, TransactionKind},
    money::Money,
    top_up::TopUp,
    wallet::NewWalletTransaction,
    wallet_dto::{
        ConfirmTopUpRequest, TopUpRequest, TopUpResponse, TransactionsResponse, WalletResponse,
        WalletTransactionDto,
    },
};
use tracing::info;
use uuid::Uuid;

pub struct WalletService;

impl WalletService {
    /// Start a top-up. Small amounts charge the gateway straight away; from
    /// the OTP threshold up, the intent parks in `RequiresAction` until the
    /// code is confirmed. Replays of the same idempotency key return the
    /// stored intent without touching the gateway again.
    pub async fn initiate_top_up(
        state: &AppState,
        account_id: Uuid,
        req: TopUpRequest,
    ) -> Result<TopUpResponse, ApiError> {
        let amount = Money::new(req.amount)?;

        let (top_up, created) =
            state
                .top_ups
                .find_or_create(account_id, &req.idempotency_key, || {
                    TopUp::new(account_id, amount, req.provider, &req.idempotency_key)
                });

        if !created && top_up.state != PaymentState::Pending {
            info!(
                "wallet.top_up: idempotent replay of {} (state {})",
                top_up.reference, top_up.state
            );
            return Ok(TopUpResponse::from(&top_up));
        }

        if top_up.amount.centavos() >= state.config.otp_threshold_centavos {
            // External call first; the intent only moves once the OTP
            // service has actually taken the request.
            let otp_reference = state.otp.issue(account_id, top_up.reference).await?;

            let updated = state.top_ups.update_with(top_up.reference, |t| {
                t.state = PaymentState::RequiresAction;
                t.otp_reference = Some(otp_reference);
                t.updated_at = Utc::now();
                Ok(())
            })?;

            info!(
                "wallet.top_up: {} of {} awaits OTP",
                updated.reference, updated.amount
            );
            return Ok(TopUpResponse::from(&updated));
        }

        let completed = Self::execute_charge(state, top_up.reference).await?;
        Ok(TopUpResponse::from(&completed))
    }

    /// Confirm an OTP-gated top-up. A malformed code is rejected locally; a
    /// code the OTP service refuses leaves the wallet untouched. Only after
    /// verification does the gateway charge and the ledger credit run.
    pub async fn confirm_top_up(
        state: &AppState,
        account_id: Uuid,
        req: ConfirmTopUpRequest,
    ) -> Result<TopUpResponse, ApiError> {
        let top_up = state
            .top_ups
            .find_by_reference(req.reference)
            .ok_or_else(|| ApiError::NotFound(format!("top-up {} not found", req.reference)))?;

        if top_up.account_id != account_id {
            return Err(ApiError::BadRequest(
                "Top-up does not belong to this wallet".into(),
            ));
        }

        match top_up.state {
            PaymentState::Completed => return Ok(TopUpResponse::from(&top_up)),
            PaymentState::RequiresAction => {}
            _ => {
                return Err(ApiError::BadRequest(
                    "Top-up is not awaiting OTP confirmation".into(),
                ))
            }
        }

        if req.otp_code.len() != 6 || !req.otp_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ApiError::BadRequest("Please enter the 6-digit OTP".into()));
        }

        let otp_reference = top_up.otp_reference.ok_or_else(|| {
            ApiError::Internal("top-up awaiting OTP has no OTP reference".into())
        })?;

        state.otp.verify(otp_reference, &req.otp_code).await?;

        let completed = Self::execute_charge(state, req.reference).await?;
        Ok(TopUpResponse::from(&completed))
    }

    pub async fn get_wallet(
        state: &AppState,
        account_id: Uuid,
    ) -> Result<WalletResponse, ApiError> {
        state.wallets.ensure_account(account_id);
        let balance = state.wallets.balance(account_id)?;
        Ok(WalletResponse {
            account_id,
            balance,
        })
    }

    pub async fn list_transactions(
        state: &AppState,
        account_id: Uuid,
    ) -> Result<TransactionsResponse, ApiError> {
        state.wallets.ensure_account(account_id);
        let transactions = state
            .wallets
            .transactions(account_id)?
            .into_iter()
            .map(WalletTransactionDto::from)
            .collect();
        Ok(TransactionsResponse { transactions })
    }

    /// Charge the gateway and, on success, credit the ledger and complete
    /// the intent in one store transaction. The gateway confirmation is the
    /// sole commit point: any failure before it leaves every record as it
    /// was.
    async fn execute_charge(state: &AppState, reference: Uuid) -> Result<TopUp, ApiError> {
        let top_up = state
            .top_ups
            .find_by_reference(reference)
            .ok_or_else(|| ApiError::NotFound(format!("top-up {} not found", reference)))?;

        let provider_reference = state
            .gateway
            .charge(top_up.amount, top_up.provider, top_up.reference)
            .await?;

        let updated = state.top_ups.update_with(reference, |t| {
            // A concurrent confirm may have landed first; never credit twice.
            if t.state == PaymentState::Completed {
                return Ok(());
            }

            state.wallets.apply(
                t.account_id,
                NewWalletTransaction::new(TransactionKind::TopUp, t.amount.centavos(), None),
            )?;

            t.state = PaymentState::Completed;
            t.provider_reference = Some(provider_reference.clone());
            t.updated_at = Utc::now();
            Ok(())
        })?;

        info!(
            "wallet.top_up: {} of {} completed via {}",
            updated.reference, updated.amount, updated.provider
        );
        Ok(updated)
    }
}
