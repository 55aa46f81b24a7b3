//! SQLite storage layer for Linkzo.
//!
//! This crate persists company orders and creator registrations in two
//! append-only tables.
//!
//! # Architecture
//!
//! - `companies`: one row per company order, keyed by an autoincrement `id`
//! - `creators`: one row per creator registration, keyed by an autoincrement `id`
//!
//! Both tables are created on open if they do not exist. There is no update
//! or delete operation.
//!
//! # Example
//!
//! ```no_run
//! use linkzo_core::CompanyOrderInput;
//! use linkzo_store::{SqliteStore, Store};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::open("./linkzo.db").await?;
//!
//! let order = CompanyOrderInput {
//!     company_name: Some("Acme".into()),
//!     email: Some("a@a.com".into()),
//!     service_required: Some("SEO".into()),
//!     budget_range: Some("1000-5000".into()),
//! }
//! .validate()?;
//!
//! let id = store.insert_company_order(&order).await?;
//! let stats = store.stats().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod schema;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use linkzo_core::{
    CompanyOrder, CreatorId, CreatorRegistration, NewCompanyOrder, NewCreatorRegistration,
    OrderId, Stats,
};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer so the HTTP service can hold any
/// implementation behind an `Arc<dyn Store>`.
#[async_trait]
pub trait Store: Send + Sync {
    // =========================================================================
    // Intake
    // =========================================================================

    /// Insert one company order, stamping `created_at` with the current time.
    ///
    /// Returns the newly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_company_order(&self, order: &NewCompanyOrder) -> Result<OrderId>;

    /// Insert one creator registration, stamping `created_at` with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_creator_registration(
        &self,
        registration: &NewCreatorRegistration,
    ) -> Result<CreatorId>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// List all company orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_company_orders(&self) -> Result<Vec<CompanyOrder>>;

    /// List all creator registrations, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_creator_registrations(&self) -> Result<Vec<CreatorRegistration>>;

    /// Count the rows of both tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn stats(&self) -> Result<Stats>;

    /// Run a trivial query to confirm the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer.
    async fn ping(&self) -> Result<()>;
}
