//! Intake handlers for the two lead-capture forms.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use linkzo_core::{CompanyOrderInput, CreatorId, CreatorRegistrationInput, OrderId};

use crate::error::ApiError;
use crate::extract::Submission;
use crate::state::AppState;

/// Message returned after a stored company order.
pub const ORDER_SUBMITTED_MESSAGE: &str = "Order submitted successfully!";

/// Message returned after a stored creator registration.
pub const REGISTRATION_MESSAGE: &str = "Registration successful!";

/// Response to a successful company order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmittedResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
    /// Identifier of the new order.
    pub order_id: OrderId,
}

/// Response to a successful creator registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRegisteredResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
    /// Identifier of the new registration.
    pub creator_id: CreatorId,
}

/// Submit a company order.
pub async fn submit_company_order(
    State(state): State<Arc<AppState>>,
    Submission(input): Submission<CompanyOrderInput>,
) -> Result<Json<OrderSubmittedResponse>, ApiError> {
    let order = input.validate()?;
    let order_id = state.store.insert_company_order(&order).await?;

    tracing::info!(
        order_id = %order_id,
        company = %order.company_name,
        service = %order.service_required,
        "Company order submitted"
    );

    Ok(Json(OrderSubmittedResponse {
        success: true,
        message: ORDER_SUBMITTED_MESSAGE.to_string(),
        order_id,
    }))
}

/// Register a creator.
pub async fn register_creator(
    State(state): State<Arc<AppState>>,
    Submission(input): Submission<CreatorRegistrationInput>,
) -> Result<Json<CreatorRegisteredResponse>, ApiError> {
    let registration = input.validate()?;
    let creator_id = state
        .store
        .insert_creator_registration(&registration)
        .await?;

    tracing::info!(
        creator_id = %creator_id,
        niche = %registration.niche,
        "Creator registered"
    );

    Ok(Json(CreatorRegisteredResponse {
        success: true,
        message: REGISTRATION_MESSAGE.to_string(),
        creator_id,
    }))
}
