use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use eyre::Report;
use http::HeaderValue;
use rentahan_core::app_state::AppState;
use rentahan_primitives::models::listing::Listing;
use rentahan_primitives::models::money::Money;
use std::env;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use uuid::Uuid;

pub fn build_cors() -> Result<CorsLayer, Report> {
    let origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into());

    let allowed_origins = origins
        .split(',')
        .map(|s| s.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| eyre::eyre!("Invalid CORS origin: {}", e))?;

    Ok(CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(allowed_origins))
}

pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }
}

pub fn build_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Result<Router, Report> {
    let cors = build_cors()?;

    Ok(rentahan_api::app::create_router(state, metric_layer, metric_handle).layer(cors))
}

/// Seed the read-only listing catalog. A real deployment reads this from the
/// listing service; the demo data mirrors the product's sample inventory,
/// each with the standard ₱1,000.00 security deposit.
pub fn initialize_system(state: &Arc<AppState>) {
    if state.listings.count() > 0 {
        return;
    }

    let deposit = Money::new(100_000).expect("deposit is non-negative");
    let catalog: [(&str, &str, i64); 5] = [
        ("Bosch Power Drill", "Tools", 25_000),
        ("Extension Ladder (12 ft)", "Tools", 18_000),
        ("Camping Tent (4-person)", "Outdoors", 30_000),
        ("Mini Projector", "Electronics", 40_000),
        ("DSLR Camera Kit", "Electronics", 80_000),
    ];

    for (name, category, rate) in catalog {
        let daily_rate = Money::new(rate).expect("rate is non-negative");
        state
            .listings
            .insert(Listing::new(Uuid::new_v4(), name, category, daily_rate, deposit));
    }

    info!("Seeded {} catalog listings", state.listings.count());
}
