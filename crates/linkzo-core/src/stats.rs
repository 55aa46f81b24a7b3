//! Dashboard statistics.

use serde::{Deserialize, Serialize};

/// Row counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of stored company orders.
    pub total_companies: i64,
    /// Number of stored creator registrations.
    pub total_creators: i64,
}
