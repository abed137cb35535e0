//! `atrium-rbac` — pure role-based access control policy.
//!
//! This crate is intentionally decoupled from HTTP, storage and UI. Every
//! decision is a synchronous in-memory lookup against a static
//! role-to-permission table, re-evaluated by callers from the latest known
//! role values.

pub mod permission;
pub mod policy;
pub mod role;

pub use permission::{Permission, ALL_PERMISSIONS};
pub use policy::{
    assignable_roles, can_assign_role, can_modify_user_role, can_remove_user, has_permission,
    permissions, validate_member_action, ActionValidity, MemberAction,
};
pub use role::{role_info, Role, RoleInfo, ALL_ROLES};
