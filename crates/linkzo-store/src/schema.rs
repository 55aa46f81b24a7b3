//! Database schema definitions.
//!
//! Every statement is idempotent so the schema can be applied on each open.

/// Table names.
pub mod table {
    /// Company orders.
    pub const COMPANIES: &str = "companies";

    /// Creator registrations.
    pub const CREATORS: &str = "creators";
}

/// DDL for the `companies` table.
pub const CREATE_COMPANIES: &str = "CREATE TABLE IF NOT EXISTS companies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_name TEXT NOT NULL,
    email TEXT NOT NULL,
    service_required TEXT NOT NULL,
    budget_range TEXT NOT NULL,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// DDL for the `creators` table.
///
/// Socials default to `''` so the columns are never null.
pub const CREATE_CREATORS: &str = "CREATE TABLE IF NOT EXISTS creators (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    instagram TEXT NOT NULL DEFAULT '',
    youtube TEXT NOT NULL DEFAULT '',
    tiktok TEXT NOT NULL DEFAULT '',
    twitter TEXT NOT NULL DEFAULT '',
    niche TEXT NOT NULL,
    audience_size TEXT NOT NULL,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Returns all schema statements in the order they must run.
#[must_use]
pub fn all_statements() -> Vec<(&'static str, &'static str)> {
    vec![
        (table::COMPANIES, CREATE_COMPANIES),
        (table::CREATORS, CREATE_CREATORS),
    ]
}
