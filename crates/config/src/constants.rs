//! Centralized constants for the roles client workspace.

/// Environment variable holding the API base URL (e.g. `http://localhost:8080/api/v1`).
pub const BASE_URL_ENV_VAR: &str = "WEBUI_API_BASE_URL";

/// Environment variable that, when set to `1` or `true`, skips `.env` loading.
pub const DOTENV_DISABLED_ENV_VAR: &str = "DOTENV_DISABLED";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
