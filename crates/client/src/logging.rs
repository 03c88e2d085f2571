//! Tracing subscriber initialization.
//!
//! The client emits `tracing` events on every request (`debug`) and every
//! failure (`warn`, with the raw error payload). Applications that do not
//! install their own subscriber can use [`TracingConfig`] to get formatted
//! output filtered by `RUST_LOG`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roles_client::logging::TracingConfig;
//!
//! TracingConfig::new().with_json(true).init()?;
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Whether to install a stdout fmt layer at all.
    pub enable_stdout: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            json: false,
            enable_stdout: true,
        }
    }
}

impl TracingConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the fallback filter directive.
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Builder method to switch to JSON output.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Builder method to control stdout layer.
    pub fn with_stdout(mut self, enable: bool) -> Self {
        self.enable_stdout = enable;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }

    /// Install the global tracing subscriber.
    ///
    /// # Errors
    /// Returns an error if a global subscriber has already been installed.
    pub fn init(&self) -> Result<(), TracingError> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match (self.enable_stdout, self.json) {
            (true, true) => registry.with(fmt::layer().json()).try_init(),
            (true, false) => registry.with(fmt::layer()).try_init(),
            (false, _) => registry.try_init(),
        };

        result.map_err(|e| TracingError::InitError(e.to_string()))
    }
}

/// Errors that can occur during tracing initialization.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    InitError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let config = TracingConfig::new()
            .with_default_filter("roles_client=debug")
            .with_json(true)
            .with_stdout(false);

        assert_eq!(config.default_filter, "roles_client=debug");
        assert!(config.json);
        assert!(!config.enable_stdout);
    }

    #[test]
    fn test_second_init_fails() {
        let config = TracingConfig::new().with_stdout(false);
        // The first call may fail too if another test installed a subscriber.
        let _ = config.init();
        assert!(matches!(config.init(), Err(TracingError::InitError(_))));
    }
}
