//! Error types for the roles client.
//!
//! Every failure collapses into [`ClientError`]. Callers that only care about
//! the server-reported reason read it through [`ClientError::detail`], which
//! is `None` whenever no `detail` field could be extracted (transport
//! failures, malformed bodies, error bodies without the field).

use serde_json::Value;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during roles API operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or no response was received.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the server.
    #[error("API error ({status}) at {url}: {}", describe_detail(.detail.as_ref()))]
    ApiError {
        status: u16,
        url: String,
        detail: Option<Value>,
    },

    /// A success response whose body is not valid JSON.
    #[error("Invalid response format ({status}) at {url}: {source}")]
    InvalidResponse {
        status: u16,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized to JSON.
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

fn describe_detail(detail: Option<&Value>) -> String {
    match detail {
        Some(value) => render_detail(value),
        None => "no detail provided".to_string(),
    }
}

fn render_detail(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl ClientError {
    /// The server-reported `detail` value, if one was extracted.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            Self::ApiError { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }

    /// The `detail` value rendered as text.
    ///
    /// String details are returned without JSON quoting; structured details
    /// (e.g. validation error lists) are rendered as compact JSON.
    pub fn detail_message(&self) -> Option<String> {
        self.detail().map(render_detail)
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::InvalidResponse { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Check if the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
