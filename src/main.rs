//! notification-service server entry point.
//!
//! Starts the Axum HTTP server with the notification REST endpoints.

use tracing_subscriber::EnvFilter;

use notification_service::api;
use notification_service::app_state::AppState;
use notification_service::config::{LogFormat, ServiceConfig, StoreBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ServiceConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }

    tracing::info!(
        addr = %config.listen_addr,
        backend = %config.store_backend,
        id_strategy = %config.id_strategy,
        "starting notification-service"
    );
    if config.store_backend == StoreBackend::File {
        tracing::info!(path = %config.store_path.display(), "using json file store");
    }

    // Build application state and router
    let app = api::build_app(AppState::from_config(&config));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
