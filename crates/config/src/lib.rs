//! Configuration management for the roles API client.
//!
//! This crate resolves the externally supplied API base URL from a `.env`
//! file, the process environment, or an explicit override.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::Config;
