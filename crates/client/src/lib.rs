//! Roles REST API client.
//!
//! This crate provides a thin async client for a server-side role management
//! API. Every operation issues exactly one HTTP request with a bearer token,
//! passes JSON bodies through unchanged, and reports failures as a
//! [`ClientError`] carrying the server's `detail` field when one exists.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::RoleApiClient;
pub use client::builder::RoleApiClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AvailableTiers, BulkTierUpdate, BulkUpdateResponse, CreateRoleForm, DeleteRoleResponse, Role,
    RoleTier, TierUpdateForm, UpdateRoleForm,
};
