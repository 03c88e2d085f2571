//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the roles client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - [`Operation::ALL`] covers every endpoint exactly once
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export test utilities from roles-client
#[allow(unused_imports)]
pub use roles_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use roles_client::{ClientError, RoleApiClient, endpoints};
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use serde_json::{Value, json};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// Bearer token used by all client-level tests.
#[allow(dead_code)]
pub fn token() -> SecretString {
    SecretString::new(TEST_TOKEN.to_string().into())
}

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> RoleApiClient {
    RoleApiClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build against mock server")
}

/// A base URL on which nothing is listening.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Every roles operation, with fixed arguments, so tests can sweep all of them.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    ListRoles,
    GetRoleByName,
    ListRolesByTier,
    CreateRole,
    UpdateRole,
    UpdateRoleTier,
    BulkUpdateTiers,
    DeleteRole,
    ListAvailableTiers,
}

#[allow(dead_code)]
impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::ListRoles,
        Operation::GetRoleByName,
        Operation::ListRolesByTier,
        Operation::CreateRole,
        Operation::UpdateRole,
        Operation::UpdateRoleTier,
        Operation::BulkUpdateTiers,
        Operation::DeleteRole,
        Operation::ListAvailableTiers,
    ];

    /// HTTP method and path (relative to the base URL) the operation must hit.
    pub fn route(self) -> (&'static str, &'static str) {
        match self {
            Operation::ListRoles => ("GET", "/roles/"),
            Operation::GetRoleByName => ("GET", "/roles/editor"),
            Operation::ListRolesByTier => ("GET", "/roles/tier/tier_2"),
            Operation::CreateRole => ("POST", "/roles/create"),
            Operation::UpdateRole => ("POST", "/roles/editor/update"),
            Operation::UpdateRoleTier => ("POST", "/roles/editor/tier"),
            Operation::BulkUpdateTiers => ("POST", "/roles/bulk-update-tiers"),
            Operation::DeleteRole => ("DELETE", "/roles/editor"),
            Operation::ListAvailableTiers => ("GET", "/roles/system/available-tiers"),
        }
    }

    /// The JSON body the operation sends, if any.
    pub fn body(self) -> Option<Value> {
        match self {
            Operation::CreateRole => Some(json!({"name": "editor", "tier": "tier_2"})),
            Operation::UpdateRole => {
                Some(json!({"description": "Content editors", "tier": "tier_2"}))
            }
            Operation::UpdateRoleTier => Some(json!({"tier": "tier_1"})),
            Operation::BulkUpdateTiers => Some(json!({"updates": {"editor": "tier_1"}})),
            _ => None,
        }
    }

    /// Invoke the operation through [`RoleApiClient`].
    pub async fn call(
        self,
        client: &RoleApiClient,
        token: &SecretString,
    ) -> roles_client::Result<Value> {
        let body = self.body().unwrap_or(Value::Null);
        match self {
            Operation::ListRoles => client.list_roles(token).await,
            Operation::GetRoleByName => client.get_role_by_name(token, "editor").await,
            Operation::ListRolesByTier => client.list_roles_by_tier(token, "tier_2").await,
            Operation::CreateRole => client.create_role(token, &body).await,
            Operation::UpdateRole => client.update_role(token, "editor", &body).await,
            Operation::UpdateRoleTier => client.update_role_tier(token, "editor", &body).await,
            Operation::BulkUpdateTiers => client.bulk_update_tiers(token, &body).await,
            Operation::DeleteRole => client.delete_role(token, "editor").await,
            Operation::ListAvailableTiers => client.list_available_tiers(token).await,
        }
    }
}
