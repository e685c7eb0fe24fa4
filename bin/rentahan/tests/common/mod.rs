use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use axum_test::TestServer;
use rentahan_core::app_state::AppState;
use rentahan_primitives::models::config::{AppConfig, GatewayInfo, OtpInfo};
use rentahan_primitives::models::enum_types::TransactionKind;
use rentahan_primitives::models::listing::Listing;
use rentahan_primitives::models::money::Money;
use rentahan_primitives::models::wallet::NewWalletTransaction;
use secrecy::SecretString;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// Build an AppState whose external collaborators point at the given mock
/// server URLs.
pub fn create_test_app_state(gateway_url: &str, otp_url: &str) -> Arc<AppState> {
    static INIT: std::sync::Once = std::sync::Once::new();

    INIT.call_once(|| {
        std::env::set_var("APP_ENV", "test");
        rentahan::utility::logging::setup_logging();
    });

    let config = AppConfig {
        app_url: "http://localhost:8080".to_string(),
        platform_fee_bps: 1_000,
        otp_threshold_centavos: 50_000,
        gateway_details: GatewayInfo {
            gateway_api_url: gateway_url.to_string(),
            gateway_secret_key: SecretString::from("sk_test_fake_gateway_key"),
            request_timeout_secs: 5,
        },
        otp_details: OtpInfo {
            otp_api_url: otp_url.to_string(),
        },
    };

    AppState::new(config).expect("Failed to build test app state")
}

/// Metrics recorder can only be installed once per process; every test
/// router shares the same pair.
fn metrics_pair() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    static PAIR: OnceLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> = OnceLock::new();
    PAIR.get_or_init(PrometheusMetricLayer::pair).clone()
}

/// Create a test application Router
pub fn create_test_app(state: Arc<AppState>) -> Router {
    let (metric_layer, metric_handle) = metrics_pair();
    rentahan_api::app::create_router(state, metric_layer, metric_handle)
}

pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    TestServer::new(create_test_app(state)).expect("Failed to start test server")
}

/// Seed one catalog listing: ₱250.00/day with the standard ₱1,000.00 deposit.
#[allow(dead_code)]
pub fn seed_listing(state: &AppState) -> Listing {
    let listing = Listing::new(
        Uuid::new_v4(),
        "Bosch Power Drill",
        "Tools",
        Money::new(25_000).expect("rate"),
        Money::new(100_000).expect("deposit"),
    );
    state.listings.insert(listing.clone());
    listing
}

/// Credit a wallet directly through the ledger, standing in for a completed
/// top-up.
#[allow(dead_code)]
pub fn fund_wallet(state: &AppState, account_id: Uuid, centavos: i64) {
    state
        .wallets
        .apply(
            account_id,
            NewWalletTransaction::new(TransactionKind::TopUp, centavos, None),
        )
        .expect("Failed to fund wallet");
}

#[allow(dead_code)]
pub fn ledger_kinds(state: &AppState, account_id: Uuid) -> Vec<TransactionKind> {
    state
        .wallets
        .transactions(account_id)
        .expect("account exists")
        .into_iter()
        .map(|tx| tx.kind)
        .collect()
}
