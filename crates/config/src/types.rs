//! Resolved configuration types.

/// Resolved connection configuration for the roles API.
///
/// The base URL is already validated and carries no trailing slash, so
/// endpoint paths such as `/roles/` can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL, e.g. `https://webui.example.com/api/v1`.
    pub base_url: String,
}

impl Config {
    /// Create a configuration from an already validated base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
