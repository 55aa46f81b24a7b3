//! Admin authentication.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// Admin access to the read-only query endpoints.
///
/// When an admin API key is configured, the `X-Admin-Key` header must match
/// it. Without a configured key every request is admitted.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected_key) = state.config.admin_api_key.as_deref() else {
            return Ok(AdminAuth);
        };

        let admin_key = parts
            .headers
            .get("x-admin-key")
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        if admin_key != expected_key {
            tracing::warn!("Rejected admin key");
            return Err(ApiError::Unauthorized);
        }

        Ok(AdminAuth)
    }
}
