//! Liveness endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database does not answer.
    pub status: &'static str,
    /// Always `"linkzo"`.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// `"ok"` or `"unavailable"`.
    pub database: &'static str,
}

/// Report liveness. Answers 503 while the database is unreachable.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, database) = match state.store.ping().await {
        Ok(()) => ("ok", StatusCode::OK, "ok"),
        Err(err) => {
            tracing::warn!(error = %err, "Database unavailable");
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: "linkzo",
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}
