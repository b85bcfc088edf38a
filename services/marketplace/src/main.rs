use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use marketplace::{AppState, config::AppConfig, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting marketplace service");

    let config = AppConfig::load()?;

    // Open the store and check connectivity
    let store = common::open_store(&config.store).await?;
    if store.health_check().await? {
        info!("Store connection successful ({})", store.backend_name());
    } else {
        anyhow::bail!("Failed to connect to {} store", store.backend_name());
    }

    let app_state = AppState::initialize(store, config.dev_mode).await?;
    if app_state.sessions.dev_mode() {
        info!("Development mode: requests without a token act as the default user");
    }

    // Start the web server
    let app = create_router(app_state);

    let listener = TcpListener::bind(&config.http_addr).await?;
    info!("Marketplace service listening on {}", config.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down marketplace service");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
