//! Company order types.
//!
//! A company order is a business inquiry submitted through the marketing site:
//! who is asking, which service they want, and their budget bracket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{require, Result, ValidationError};
use crate::OrderId;

/// Raw company order form input.
///
/// Every field is optional here; presence is checked by [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyOrderInput {
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Contact email. Only presence is checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Service the company is asking for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_required: Option<String>,
    /// Budget bracket, e.g. `"1000-5000"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
}

impl CompanyOrderInput {
    /// Check that all four fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::IncompleteCompanyOrder` listing every missing field.
    pub fn validate(self) -> Result<NewCompanyOrder> {
        let mut missing = Vec::new();

        let order = NewCompanyOrder {
            company_name: require(self.company_name, "company_name", &mut missing),
            email: require(self.email, "email", &mut missing),
            service_required: require(self.service_required, "service_required", &mut missing),
            budget_range: require(self.budget_range, "budget_range", &mut missing),
        };

        if missing.is_empty() {
            Ok(order)
        } else {
            Err(ValidationError::IncompleteCompanyOrder { missing })
        }
    }
}

/// A validated company order ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompanyOrder {
    /// Company name.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Service required.
    pub service_required: String,
    /// Budget range.
    pub budget_range: String,
}

/// A persisted company order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOrder {
    /// Row identifier.
    pub id: OrderId,
    /// Company name.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Service required.
    pub service_required: String,
    /// Budget range.
    pub budget_range: String,
    /// When the order was stored.
    pub created_at: DateTime<Utc>,
}
