//! Role management endpoints.
//!
//! All paths live under the `/roles` prefix of the configured base URL.
//! Path parameters are interpolated verbatim; callers must pass URL-safe
//! role names and tiers.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;

use crate::endpoints::request::{authorized_request, send_json_request, with_json_body};
use crate::error::Result;

/// Issue a bodiless request to `path`.
async fn call(
    client: &Client,
    method: Method,
    base_url: &str,
    auth_token: &str,
    path: &str,
) -> Result<Value> {
    let method_name = method.as_str().to_string();
    let builder = authorized_request(client, method, base_url, path, auth_token);
    send_json_request(builder, path, &method_name).await
}

/// Issue a POST request to `path` with a JSON body.
async fn post_json<B>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    path: &str,
    body: &B,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    let builder = authorized_request(client, Method::POST, base_url, path, auth_token);
    let builder = with_json_body(builder, body)?;
    send_json_request(builder, path, "POST").await
}

/// List all roles.
pub async fn list_roles(client: &Client, base_url: &str, auth_token: &str) -> Result<Value> {
    call(client, Method::GET, base_url, auth_token, "/roles/").await
}

/// Get a single role by name.
///
/// The name is interpolated verbatim. An empty name resolves to the
/// collection path `/roles/`, which lists roles instead.
pub async fn get_role_by_name(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    role_name: &str,
) -> Result<Value> {
    let path = format!("/roles/{}", role_name);
    call(client, Method::GET, base_url, auth_token, &path).await
}

/// List all roles assigned to a tier.
pub async fn list_roles_by_tier(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    tier: &str,
) -> Result<Value> {
    let path = format!("/roles/tier/{}", tier);
    call(client, Method::GET, base_url, auth_token, &path).await
}

/// Create a new role.
pub async fn create_role<B>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    body: &B,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    post_json(client, base_url, auth_token, "/roles/create", body).await
}

/// Update an existing role.
pub async fn update_role<B>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    role_name: &str,
    body: &B,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    let path = format!("/roles/{}/update", role_name);
    post_json(client, base_url, auth_token, &path, body).await
}

/// Update only the tier of a role.
pub async fn update_role_tier<B>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    role_name: &str,
    body: &B,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    let path = format!("/roles/{}/tier", role_name);
    post_json(client, base_url, auth_token, &path, body).await
}

/// Update the tiers of several roles in one request.
pub async fn bulk_update_tiers<B>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    body: &B,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    post_json(client, base_url, auth_token, "/roles/bulk-update-tiers", body).await
}

/// Delete a role by name.
///
/// The name is interpolated verbatim. An empty name sends
/// `DELETE /roles/` to the collection path.
pub async fn delete_role(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    role_name: &str,
) -> Result<Value> {
    let path = format!("/roles/{}", role_name);
    call(client, Method::DELETE, base_url, auth_token, &path).await
}

/// List the tiers the server accepts, with their descriptions.
pub async fn list_available_tiers(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Value> {
    call(
        client,
        Method::GET,
        base_url,
        auth_token,
        "/roles/system/available-tiers",
    )
    .await
}
