//! Core types and validation for Linkzo.
//!
//! This crate provides the foundational types shared by the store, the HTTP
//! service and the client SDK:
//!
//! - **Identifiers**: `OrderId`, `CreatorId`
//! - **Company orders**: `CompanyOrderInput`, `NewCompanyOrder`, `CompanyOrder`
//! - **Creator registrations**: `CreatorRegistrationInput`, `NewCreatorRegistration`,
//!   `CreatorRegistration`
//! - **Stats**: `Stats`
//! - **Errors**: `ValidationError`
//!
//! # Submission flow
//!
//! Raw form input arrives as an `*Input` type where every field is optional.
//! Calling `validate()` either yields a `New*` value with every required field
//! present and non-empty, or a `ValidationError` carrying the fixed message
//! shown to the submitter. Only `New*` values can be persisted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod company;
pub mod creator;
pub mod error;
pub mod ids;
pub mod stats;

pub use company::{CompanyOrder, CompanyOrderInput, NewCompanyOrder};
pub use creator::{CreatorRegistration, CreatorRegistrationInput, NewCreatorRegistration};
pub use error::{Result, ValidationError};
pub use ids::{CreatorId, OrderId};
pub use stats::Stats;
