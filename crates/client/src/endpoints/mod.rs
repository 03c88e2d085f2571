//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP request through the shared
//! helpers in [`request`].

pub mod request;
mod roles;

pub use request::{authorized_request, extract_detail, send_json_request, with_json_body};
pub use roles::{
    bulk_update_tiers, create_role, delete_role, get_role_by_name, list_available_tiers,
    list_roles, list_roles_by_tier, update_role, update_role_tier,
};
