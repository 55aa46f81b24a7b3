//! Response types for the Linkzo client.

use serde::Deserialize;

use linkzo_core::{CreatorId, OrderId};

/// Confirmation of a stored company order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmitted {
    /// Confirmation message.
    pub message: String,
    /// Identifier of the new order.
    pub order_id: OrderId,
}

/// Confirmation of a stored creator registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRegistered {
    /// Confirmation message.
    pub message: String,
    /// Identifier of the new registration.
    pub creator_id: CreatorId,
}

/// `{"success": true, "data": ...}` envelope of the admin endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// `{"success": false, "message": ...}` envelope of every failure.
#[derive(Debug, Deserialize)]
pub(crate) struct FailureEnvelope {
    pub message: String,
}
