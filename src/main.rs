//! Parking Dashboard Server
//!
//! Main entry point.

use parkserver::{
    facility_store::{FacilityRepository, FacilityService},
    kv_store::MySqlKvStore,
    occupancy_simulator::OccupancySimulator,
    state::{AppConfig, AppState},
    stats_service::StatsService,
    web_api,
};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parkserver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting parking dashboard server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::default();
    tracing::info!(
        database_url = %config.database_url,
        simulation_interval_secs = config.simulation_interval_secs,
        "Configuration loaded"
    );

    // Create database pool
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected");

    // Initialize key-value store
    let store = Arc::new(MySqlKvStore::new(pool));
    store.init_schema().await?;
    tracing::info!("KvStore schema ready");

    let repository = FacilityRepository::new(store);
    let facility = Arc::new(FacilityService::new(repository.clone()));
    let stats = Arc::new(StatsService::new(repository.clone()));

    // Seed before accepting traffic; a store failure here aborts startup
    facility.ensure_seeded().await?;
    tracing::info!("Facility collections ready");

    // Start occupancy simulator
    let simulator = Arc::new(OccupancySimulator::new(
        repository,
        Duration::from_secs(config.simulation_interval_secs),
    ));
    simulator.start().await;

    // Create application state
    let state = AppState {
        config: config.clone(),
        facility,
        stats,
    };

    let app = web_api::create_router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Let the periodic task wind down with the process
    simulator.stop().await;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
