//! Linkzo Client SDK.
//!
//! This crate provides a client library for submitting leads to a Linkzo
//! service and reading them back through the admin API.
//!
//! # Example
//!
//! ```no_run
//! use linkzo_client::{CompanyOrderInput, LinkzoClient};
//!
//! # async fn example() -> Result<(), linkzo_client::ClientError> {
//! let client = LinkzoClient::new("http://localhost:3000")?;
//!
//! let submitted = client
//!     .submit_company_order(&CompanyOrderInput {
//!         company_name: Some("Acme".into()),
//!         email: Some("a@a.com".into()),
//!         service_required: Some("SEO".into()),
//!         budget_range: Some("1000-5000".into()),
//!     })
//!     .await?;
//!
//! println!("Order {} stored", submitted.order_id);
//!
//! let stats = client.stats().await?;
//! println!("{} companies, {} creators", stats.total_companies, stats.total_creators);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, LinkzoClient};
pub use error::ClientError;
pub use types::{CreatorRegistered, OrderSubmitted};

pub use linkzo_core::{
    CompanyOrder, CompanyOrderInput, CreatorId, CreatorRegistration, CreatorRegistrationInput,
    OrderId, Stats,
};
