//! activity-roster server entry point.
//!
//! Seeds the activity catalog and starts the Axum HTTP server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use activity_roster::api;
use activity_roster::app_state::AppState;
use activity_roster::config::{LogFormat, RosterConfig};
use activity_roster::domain::ActivityCatalog;
use activity_roster::service::RosterService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = RosterConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting activity-roster");

    // Build domain layer
    let catalog = Arc::new(ActivityCatalog::from_seed(config.load_seed()?)?);
    tracing::info!(
        activities = catalog.len(),
        seed_file = ?config.seed_file,
        "activity catalog seeded"
    );

    // Build service layer
    let roster_service = Arc::new(RosterService::new(catalog));

    // Build application state and router
    let app_state = AppState { roster_service };
    let app = api::build_app(app_state, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
