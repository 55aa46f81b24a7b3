//! Linkzo Service - lead intake API for the Linkzo marketing site
//!
//! This is the main entry point for the linkzo service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkzo_service::{create_router, AppState, ServiceConfig};
use linkzo_store::SqliteStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,linkzo_service=debug,linkzo_store=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Linkzo Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        database_path = %config.database_path.display(),
        public_dir = %config.public_dir.display(),
        admin_protected = %config.admin_protected(),
        "Service configuration loaded"
    );

    // Open the SQLite store; tables are created if missing
    let store = Arc::new(SqliteStore::open(&config.database_path).await?);

    let state = AppState::new(store.clone(), config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(listen_addr = %config.listen_addr, "Linkzo server running");
    tracing::info!(path = "/admin", "Admin panel available");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;

    Ok(())
}

/// Resolve on Ctrl-C / SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down server");
}
