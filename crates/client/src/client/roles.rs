//! Role management API methods for [`RoleApiClient`].
//!
//! # What this module handles:
//! - Listing roles (all, by name, by tier)
//! - Creating, updating, re-tiering and deleting roles
//! - Bulk tier updates
//! - Listing the tiers the server accepts
//!
//! # What this module does NOT handle:
//! - Low-level role endpoint HTTP calls (in [`crate::endpoints`])
//! - Interpreting payloads; results are returned exactly as the server sent them

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::client::RoleApiClient;
use crate::endpoints;
use crate::error::Result;

impl RoleApiClient {
    /// List all roles.
    pub async fn list_roles(&self, token: &SecretString) -> Result<Value> {
        endpoints::list_roles(&self.http, &self.base_url, token.expose_secret()).await
    }

    /// Get a role by name.
    ///
    /// An empty `role_name` hits the collection path `/roles/`.
    pub async fn get_role_by_name(&self, token: &SecretString, role_name: &str) -> Result<Value> {
        endpoints::get_role_by_name(&self.http, &self.base_url, token.expose_secret(), role_name)
            .await
    }

    /// List roles assigned to `tier`.
    pub async fn list_roles_by_tier(&self, token: &SecretString, tier: &str) -> Result<Value> {
        endpoints::list_roles_by_tier(&self.http, &self.base_url, token.expose_secret(), tier)
            .await
    }

    /// Create a new role from any JSON-serializable body.
    pub async fn create_role<B>(&self, token: &SecretString, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        endpoints::create_role(&self.http, &self.base_url, token.expose_secret(), body).await
    }

    /// Update an existing role.
    pub async fn update_role<B>(
        &self,
        token: &SecretString,
        role_name: &str,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        endpoints::update_role(
            &self.http,
            &self.base_url,
            token.expose_secret(),
            role_name,
            body,
        )
        .await
    }

    /// Update only the tier of a role.
    pub async fn update_role_tier<B>(
        &self,
        token: &SecretString,
        role_name: &str,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        endpoints::update_role_tier(
            &self.http,
            &self.base_url,
            token.expose_secret(),
            role_name,
            body,
        )
        .await
    }

    /// Update the tiers of several roles at once.
    pub async fn bulk_update_tiers<B>(&self, token: &SecretString, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        endpoints::bulk_update_tiers(&self.http, &self.base_url, token.expose_secret(), body).await
    }

    /// Delete a role by name.
    ///
    /// An empty `role_name` hits the collection path `/roles/`.
    pub async fn delete_role(&self, token: &SecretString, role_name: &str) -> Result<Value> {
        endpoints::delete_role(&self.http, &self.base_url, token.expose_secret(), role_name).await
    }

    /// List the tiers the server accepts.
    pub async fn list_available_tiers(&self, token: &SecretString) -> Result<Value> {
        endpoints::list_available_tiers(&self.http, &self.base_url, token.expose_secret()).await
    }
}
