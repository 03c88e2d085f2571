//! Uniform request/response protocol shared by every roles endpoint.
//!
//! Every endpoint follows the same steps:
//! - Build the request with `Content-Type: application/json` and a bearer token
//! - Optionally attach a JSON-serialized body
//! - Send it exactly once (no retries, no timeouts beyond the transport default)
//! - Classify the response as success (parsed JSON) or failure (extracted `detail`)
//!
//! Every failure is logged with `tracing::warn!` before it is returned.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Name of the field servers use for a human-readable error description.
pub const DETAIL_FIELD: &str = "detail";

/// Build a request to `base_url + path` carrying the JSON content type and bearer token.
///
/// `path` is appended verbatim; path parameters are not percent-encoded here.
pub fn authorized_request(
    client: &Client,
    method: Method,
    base_url: &str,
    path: &str,
    auth_token: &str,
) -> RequestBuilder {
    client
        .request(method, format!("{}{}", base_url, path))
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", auth_token))
}

/// Serialize `body` to JSON and attach it to the request unchanged.
///
/// # Errors
///
/// Returns [`ClientError::InvalidRequest`] if `body` cannot be serialized.
pub fn with_json_body<B>(builder: RequestBuilder, body: &B) -> Result<RequestBuilder>
where
    B: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(body).map_err(|e| {
        warn!(error = %e, "Failed to serialize request body");
        ClientError::InvalidRequest(e)
    })?;
    Ok(builder.body(payload))
}

/// Send a request once and decode the JSON response.
///
/// - Success status: the body is returned unmodified; an empty body yields `Value::Null`.
/// - Non-success status: the body is parsed best-effort and its `detail` field is
///   returned in [`ClientError::ApiError`] (absent or `null` becomes `None`).
/// - Transport failures surface as [`ClientError::HttpError`].
///
/// `endpoint` and `method` are only used for log context.
pub async fn send_json_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Value> {
    debug!(endpoint, method, "Sending roles API request");

    let response = builder.send().await.map_err(|e| {
        warn!(endpoint, method, error = %e, "Roles API request failed without a response");
        ClientError::from(e)
    })?;

    let status = response.status();
    let url = response.url().to_string();

    let body = response.bytes().await.map_err(|e| {
        warn!(
            endpoint,
            method,
            status = status.as_u16(),
            error = %e,
            "Failed to read roles API response body"
        );
        ClientError::from(e)
    })?;

    if status.is_success() {
        return parse_body(&body).map_err(|source| {
            warn!(
                endpoint,
                method,
                status = status.as_u16(),
                payload = %String::from_utf8_lossy(&body),
                error = %source,
                "Roles API returned a malformed response body"
            );
            ClientError::InvalidResponse {
                status: status.as_u16(),
                url,
                source,
            }
        });
    }

    let detail = parse_body(&body)
        .ok()
        .as_ref()
        .and_then(extract_detail);

    warn!(
        endpoint,
        method,
        status = status.as_u16(),
        payload = %String::from_utf8_lossy(&body),
        "Roles API request failed"
    );

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        detail,
    })
}

/// Parse a response body, treating an empty body as JSON `null`.
///
/// A whitespace-only body is not valid JSON and fails to parse.
fn parse_body(body: &[u8]) -> std::result::Result<Value, serde_json::Error> {
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
}

/// Extract the `detail` field from an error payload.
///
/// Returns `None` when the payload is not an object, lacks the field, or the
/// field is JSON `null`.
pub fn extract_detail(payload: &Value) -> Option<Value> {
    payload
        .get(DETAIL_FIELD)
        .filter(|detail| !detail.is_null())
        .cloned()
}
