//! Application state.

use std::sync::Arc;

use linkzo_store::Store;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<dyn Store>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        if config.admin_protected() {
            tracing::info!("Admin endpoints require X-Admin-Key");
        } else {
            tracing::warn!("ADMIN_API_KEY not set - admin endpoints are open");
        }

        Self { store, config }
    }
}
