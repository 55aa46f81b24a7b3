//! Read-only admin handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use linkzo_core::{CompanyOrder, CreatorRegistration, Stats};

use crate::auth::AdminAuth;
use crate::error::ApiError;
use crate::state::AppState;

/// Success envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Payload.
    pub data: T,
}

impl<T> DataResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// List every company order, newest first.
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
    _auth: AdminAuth,
) -> Result<Json<DataResponse<Vec<CompanyOrder>>>, ApiError> {
    let orders = state.store.list_company_orders().await?;
    tracing::debug!(count = orders.len(), "Listed company orders");
    Ok(DataResponse::ok(orders))
}

/// List every creator registration, newest first.
pub async fn list_creators(
    State(state): State<Arc<AppState>>,
    _auth: AdminAuth,
) -> Result<Json<DataResponse<Vec<CreatorRegistration>>>, ApiError> {
    let creators = state.store.list_creator_registrations().await?;
    tracing::debug!(count = creators.len(), "Listed creators");
    Ok(DataResponse::ok(creators))
}

/// Dashboard totals.
pub async fn stats(
    State(state): State<Arc<AppState>>,
    _auth: AdminAuth,
) -> Result<Json<DataResponse<Stats>>, ApiError> {
    Ok(DataResponse::ok(state.store.stats().await?))
}
