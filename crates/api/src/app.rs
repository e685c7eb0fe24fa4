use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    accept_booking::accept_booking, cancel_booking::cancel_booking,
    confirm_pickup::confirm_pickup, confirm_return::confirm_return,
    confirm_top_up::confirm_top_up, create_booking::create_booking,
    decline_booking::decline_booking, get_booking::get_booking, health::health_check,
    list_listings::get_listings, list_messages::list_messages, post_message::post_message,
    subject_rating::subject_rating, submit_review::submit_review, top_up::top_up,
    wallet_balance::get_wallet, wallet_transactions::get_wallet_transactions,
};
use axum::routing::{get, post};
use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use rentahan_core::AppState;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    // rate limiting configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    let api_router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/listings", get(get_listings))
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/{booking_id}", get(get_booking))
        .route("/api/bookings/{booking_id}/accept", post(accept_booking))
        .route("/api/bookings/{booking_id}/decline", post(decline_booking))
        .route("/api/bookings/{booking_id}/pickup", post(confirm_pickup))
        .route("/api/bookings/{booking_id}/return", post(confirm_return))
        .route("/api/bookings/{booking_id}/cancel", post(cancel_booking))
        .route("/api/bookings/{booking_id}/messages", post(post_message))
        .route("/api/bookings/{booking_id}/messages", get(list_messages))
        .route("/api/bookings/{booking_id}/reviews", post(submit_review))
        .route("/api/reviews/{subject_id}/average", get(subject_rating))
        .route("/api/wallets/{account_id}", get(get_wallet))
        .route("/api/wallets/{account_id}/top_up", post(top_up))
        .route(
            "/api/wallets/{account_id}/top_up/confirm",
            post(confirm_top_up),
        )
        .route(
            "/api/wallets/{account_id}/transactions",
            get(get_wallet_transactions),
        );

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(metric_layer)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        );

    // disable rate limiting in test environment to avoid "Unable To Extract Key!" errors
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}
