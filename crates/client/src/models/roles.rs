//! Role models for the roles management API.
//!
//! The client passes request and response bodies through untouched; these
//! types are optional conveniences for callers that want typed payloads.
//! Serialize a form and hand it to an endpoint, or decode a returned
//! `serde_json::Value` with [`serde_json::from_value`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard permission tiers known to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoleTier {
    #[default]
    #[serde(rename = "tier_0")]
    Tier0,
    #[serde(rename = "tier_1")]
    Tier1,
    #[serde(rename = "tier_2")]
    Tier2,
    #[serde(rename = "tier_3")]
    Tier3,
}

impl RoleTier {
    /// All standard tiers, lowest access first.
    pub const ALL: [RoleTier; 4] = [Self::Tier0, Self::Tier1, Self::Tier2, Self::Tier3];

    /// Wire representation, e.g. `tier_2`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tier0 => "tier_0",
            Self::Tier1 => "tier_1",
            Self::Tier2 => "tier_2",
            Self::Tier3 => "tier_3",
        }
    }

    /// Human-readable description of the access level.
    pub fn description(self) -> &'static str {
        match self {
            Self::Tier0 => "Minimal access - Basic view permissions only",
            Self::Tier1 => "Basic access - Standard user permissions",
            Self::Tier2 => "Enhanced access - Advanced user permissions",
            Self::Tier3 => "Admin access - Full system access",
        }
    }

    /// Parse a wire tier string. Returns `None` for non-standard tiers.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_tier() -> String {
    RoleTier::default().as_str().to_string()
}

/// A role as returned by the server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Tier string; usually one of [`RoleTier`] but not restricted to it.
    #[serde(default = "default_tier")]
    pub tier: String,
    /// Creation time, epoch seconds.
    pub created_at: i64,
    /// Last update time, epoch seconds.
    pub updated_at: i64,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, Value>>,
}

impl Role {
    /// System roles are flagged with `metadata.is_system_role == true`.
    ///
    /// The server refuses to update, re-tier or delete them.
    pub fn is_system_role(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("is_system_role"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The standard tier this role belongs to, if it is one.
    pub fn standard_tier(&self) -> Option<RoleTier> {
        RoleTier::from_wire(&self.tier)
    }
}

/// Body for creating a role.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateRoleForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_tier")]
    pub tier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, Value>>,
}

impl CreateRoleForm {
    /// A form for `name` at the default tier with no description or metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tier: default_tier(),
            metadata: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = tier.into();
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body for updating a role. The tier is always required.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UpdateRoleForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, Value>>,
}

/// Body for changing only a role's tier.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TierUpdateForm {
    pub tier: String,
}

impl TierUpdateForm {
    pub fn new(tier: impl Into<String>) -> Self {
        Self { tier: tier.into() }
    }
}

impl From<RoleTier> for TierUpdateForm {
    fn from(tier: RoleTier) -> Self {
        Self::new(tier.as_str())
    }
}

/// Body for bulk tier updates: role name to new tier.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct BulkTierUpdate {
    pub updates: BTreeMap<String, String>,
}

impl BulkTierUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the target tier for `role`.
    pub fn set(mut self, role: impl Into<String>, tier: impl Into<String>) -> Self {
        self.updates.insert(role.into(), tier.into());
        self
    }
}

/// Per-role outcome of a bulk tier update.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct BulkUpdateResponse {
    pub results: BTreeMap<String, bool>,
}

impl BulkUpdateResponse {
    /// Names of roles whose update did not apply.
    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, ok)| !**ok)
            .map(|(name, _)| name.as_str())
    }
}

/// Tiers the server accepts, with descriptions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AvailableTiers {
    pub tiers: Vec<String>,
    #[serde(default)]
    pub descriptions: BTreeMap<String, String>,
}

impl AvailableTiers {
    /// The standard tier set, as the server reports it.
    pub fn standard() -> Self {
        Self {
            tiers: RoleTier::ALL
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            descriptions: RoleTier::ALL
                .iter()
                .map(|t| (t.as_str().to_string(), t.description().to_string()))
                .collect(),
        }
    }
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeleteRoleResponse {
    pub message: String,
}
