//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges `.env`, environment and explicit values.
//! - Validate and normalize the base URL when building the final `Config`.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called after `from_env()`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - The built base URL never ends with a slash.

use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{BASE_URL_ENV_VAR, DOTENV_DISABLED_ENV_VAR};
use crate::types::Config;

/// Configuration loader that builds config from `.env` files and environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the API base URL explicitly.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    /// The base URL collected so far, before validation.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingBaseUrl` if no base URL was supplied.
    /// - `ConfigError::InvalidValue` if the base URL is not an absolute http(s) URL,
    ///   or carries a query string or fragment.
    pub fn build(self) -> Result<Config, ConfigError> {
        let raw = self
            .base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
            var: BASE_URL_ENV_VAR.to_string(),
            message: format!("not a valid URL: {}", e),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                var: BASE_URL_ENV_VAR.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidValue {
                var: BASE_URL_ENV_VAR.to_string(),
                message: "query string or fragment not allowed".to_string(),
            });
        }

        Ok(Config::new(raw.trim_end_matches('/')))
    }
}
