//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{admin, health, intake};
use crate::state::AppState;

/// Maximum concurrent requests across all `/api` routes.
const API_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `GET /` - Site landing page (`index.html`)
/// - `GET /admin` - Admin page (`admin.html`)
/// - any other `GET` - Static file from the public directory
///
/// ## Intake
/// - `POST /api/company-order` - Submit a company order
/// - `POST /api/creator-register` - Register a creator
///
/// ## Admin (optional `X-Admin-Key`)
/// - `GET /api/admin/companies` - List company orders
/// - `GET /api/admin/creators` - List creator registrations
/// - `GET /api/admin/stats` - Row counts
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;
    let public_dir = state.config.public_dir.clone();

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health::health))
        .nest_service(
            "/api",
            limited_api(Arc::clone(&state), API_MAX_CONCURRENT_REQUESTS),
        )
        .merge(site_routes(&public_dir))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// The `/api` routes behind one concurrency limit.
///
/// The limit wraps the whole router, so every endpoint draws from the same
/// pool of permits.
fn limited_api(state: Arc<AppState>, max_concurrent: usize) -> ConcurrencyLimit<Router> {
    let routes = Router::new()
        // Intake
        .route("/company-order", post(intake::submit_company_order))
        .route("/creator-register", post(intake::register_creator))
        // Admin queries
        .route("/admin/companies", get(admin::list_companies))
        .route("/admin/creators", get(admin::list_creators))
        .route("/admin/stats", get(admin::stats))
        .with_state(state);

    ConcurrencyLimit::new(routes, max_concurrent)
}

/// Static site: named pages plus a directory fallback for assets.
fn site_routes(public_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .route_service("/admin", ServeFile::new(public_dir.join("admin.html")))
        .fallback_service(ServeDir::new(public_dir))
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
