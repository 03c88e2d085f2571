//! Client builder for constructing [`RoleApiClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client
//!
//! # Invariants
//! - `base_url` is required and must parse as an absolute URL before `build()` succeeds
//! - The base URL is always normalized to have no trailing slashes
//! - The base URL carries no query string or fragment
//! - No request timeout is configured; the transport default applies

use reqwest::Url;

use crate::client::RoleApiClient;
use crate::error::{ClientError, Result};
use roles_config::{Config, constants::DEFAULT_MAX_REDIRECTS};

/// Builder for creating a new [`RoleApiClient`].
///
/// # Example
///
/// ```rust,ignore
/// use roles_client::RoleApiClient;
///
/// let client = RoleApiClient::builder()
///     .base_url("https://webui.example.com/api/v1".to_string())
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct RoleApiClientBuilder {
    base_url: Option<String>,
    http: Option<reqwest::Client>,
}

impl RoleApiClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    ///
    /// All endpoint paths (`/roles/...`) are appended to it, so it should
    /// include any API prefix, e.g. `http://localhost:8080/api/v1`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use a pre-built HTTP client instead of the default one.
    ///
    /// Useful for sharing a connection pool or installing custom TLS roots.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Create a client builder from loaded configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use roles_client::RoleApiClient;
    /// use roles_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load_dotenv()?.from_env().build()?;
    /// let client = RoleApiClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.base_url.clone());
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    ///
    /// # Examples
    ///
    /// - `"http://localhost:8080/api/v1/"` -> `"http://localhost:8080/api/v1"`
    /// - `"http://localhost:8080/api/v1"` -> `"http://localhost:8080/api/v1"`
    /// - `"http://localhost:8080//"` -> `"http://localhost:8080"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`RoleApiClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or does not parse.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<RoleApiClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let parsed = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))?;

        // Endpoint paths are appended textually.
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ClientError::InvalidUrl(format!(
                "Invalid base URL: query or fragment not allowed in '{}'",
                base_url
            )));
        }

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
                .user_agent(concat!("roles-client/", env!("CARGO_PKG_VERSION")))
                .build()?,
        };

        Ok(RoleApiClient { http, base_url })
    }
}
