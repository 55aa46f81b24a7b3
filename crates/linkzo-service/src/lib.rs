//! Linkzo HTTP API Service.
//!
//! This crate provides the HTTP surface of the Linkzo marketing site:
//!
//! - Intake: company orders and creator registrations
//! - Admin queries: listings and dashboard stats
//! - The static site itself (`/`, `/admin` and assets)
//!
//! # Admin access
//!
//! The admin endpoints are open unless an admin API key is configured, in
//! which case they require a matching `X-Admin-Key` header.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
