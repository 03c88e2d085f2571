//! Data models for roles API payloads.

pub mod roles;

pub use roles::{
    AvailableTiers, BulkTierUpdate, BulkUpdateResponse, CreateRoleForm, DeleteRoleResponse, Role,
    RoleTier, TierUpdateForm, UpdateRoleForm,
};
