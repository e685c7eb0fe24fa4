mod observability;

pub mod utility;

pub use rentahan_primitives::error::ApiError;

use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, initialize_system, load_env};
use eyre::Report;
use rentahan_core::app_state::AppState;
use rentahan_primitives::models::config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting rentahan application...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. build application state
    let state = AppState::new(config)?;

    // 5. seed the listing catalog
    initialize_system(&state);

    // 6. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 7. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 8. start HTTP server
    serve(app).await?;

    info!("rentahan application shut down gracefully");
    Ok(())
}
