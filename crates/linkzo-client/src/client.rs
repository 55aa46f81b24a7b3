//! Linkzo HTTP client implementation.

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use linkzo_core::{
    CompanyOrder, CompanyOrderInput, CreatorRegistration, CreatorRegistrationInput, Stats,
};

use crate::error::ClientError;
use crate::types::{CreatorRegistered, DataEnvelope, FailureEnvelope, OrderSubmitted};

/// Linkzo API client.
///
/// Submits company orders and creator registrations, and reads them back
/// through the admin endpoints.
#[derive(Debug, Clone)]
pub struct LinkzoClient {
    client: Client,
    base_url: String,
    admin_key: Option<String>,
}

impl LinkzoClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Linkzo service (e.g., `"http://localhost:3000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base URL: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url,
            admin_key: options.admin_key,
        })
    }

    /// Submit a company order.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if a required field is missing, or
    /// another error if the request fails.
    pub async fn submit_company_order(
        &self,
        order: &CompanyOrderInput,
    ) -> Result<OrderSubmitted, ClientError> {
        let url = format!("{}/api/company-order", self.base_url);
        let response = self.client.post(&url).json(order).send().await?;

        let submitted: OrderSubmitted = Self::handle_response(response).await?;
        tracing::debug!(order_id = %submitted.order_id, "Company order submitted");
        Ok(submitted)
    }

    /// Register a creator.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if a required field is missing, or
    /// another error if the request fails.
    pub async fn register_creator(
        &self,
        registration: &CreatorRegistrationInput,
    ) -> Result<CreatorRegistered, ClientError> {
        let url = format!("{}/api/creator-register", self.base_url);
        let response = self.client.post(&url).json(registration).send().await?;

        let registered: CreatorRegistered = Self::handle_response(response).await?;
        tracing::debug!(creator_id = %registered.creator_id, "Creator registered");
        Ok(registered)
    }

    /// List every company order, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_companies(&self) -> Result<Vec<CompanyOrder>, ClientError> {
        self.admin_get("companies").await
    }

    /// List every creator registration, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_creators(&self) -> Result<Vec<CreatorRegistration>, ClientError> {
        self.admin_get("creators").await
    }

    /// Fetch dashboard totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn stats(&self) -> Result<Stats, ClientError> {
        self.admin_get("stats").await
    }

    async fn admin_get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ClientError> {
        let url = format!("{}/api/admin/{resource}", self.base_url);
        let response = self.with_admin_key(self.client.get(&url)).send().await?;

        let envelope: DataEnvelope<T> = Self::handle_response(response).await?;
        Ok(envelope.data)
    }

    fn with_admin_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.admin_key {
            Some(key) => request.header("x-admin-key", key),
            None => request,
        }
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<FailureEnvelope>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::BAD_REQUEST => Err(ClientError::Validation { message }),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            _ => Err(ClientError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// Key sent as `X-Admin-Key` on admin requests.
    pub admin_key: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            admin_key: None,
        }
    }
}

impl ClientOptions {
    /// Create options carrying an admin key.
    #[must_use]
    pub fn with_admin_key(key: impl Into<String>) -> Self {
        Self {
            admin_key: Some(key.into()),
            ..Self::default()
        }
    }
}
