//! Main roles REST API client and API methods.
//!
//! This module provides the primary [`RoleApiClient`]. It holds only the
//! transport handle and the base URL; the bearer token is supplied on every
//! call and never stored.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `roles`: Role management methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries, caching, or token refresh (callers own those decisions)
//!
//! # Invariants
//! - Every API method issues exactly one HTTP request
//! - Clones share the underlying connection pool; concurrent calls are independent

pub mod builder;
mod roles;

/// Roles REST API client.
///
/// # Creating a Client
///
/// Use [`RoleApiClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use roles_client::RoleApiClient;
/// use secrecy::SecretString;
///
/// let client = RoleApiClient::builder()
///     .base_url("http://localhost:8080/api/v1".to_string())
///     .build()?;
///
/// let token = SecretString::from("my-token");
/// let roles = client.list_roles(&token).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RoleApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl RoleApiClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`RoleApiClient`].
    pub fn builder() -> builder::RoleApiClientBuilder {
        builder::RoleApiClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
