//! Role-to-permission table and derived decision rules.
//!
//! All functions here are pure and side-effect free; callers re-check on
//! every render rather than caching decisions.

use serde::{Deserialize, Serialize};

use crate::permission::Permission;
use crate::role::{Role, ALL_ROLES};

/// Static permission set for a role, matching the backend's defaults.
pub fn permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Owner => &[
            Permission::CompanyRead,
            Permission::CompanyUpdate,
            Permission::CompanyDelete,
            Permission::CompanyTransferOwnership,
            Permission::MemberRead,
            Permission::MemberInvite,
            Permission::MemberRemove,
            Permission::MemberUpdateRole,
            Permission::RoleAssignAdmin,
            Permission::RoleAssignMember,
            Permission::RoleRemoveAdmin,
            Permission::ViewAuditLogs,
            Permission::ManageCompanySettings,
        ],
        Role::Admin => &[
            Permission::CompanyRead,
            Permission::CompanyUpdate,
            Permission::MemberRead,
            Permission::MemberInvite,
            Permission::MemberRemove,
            Permission::MemberUpdateRole,
            Permission::RoleAssignMember,
            Permission::ManageCompanySettings,
        ],
        Role::Member => &[Permission::CompanyRead, Permission::MemberRead],
    }
}

/// Whether `role` holds `permission` in the static table.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions(role).contains(&permission)
}

/// Whether `actor` may assign `target` to someone.
///
/// OWNER is assignable only by OWNER; ADMIN by OWNER or ADMIN; MEMBER by
/// anyone holding MEMBER_INVITE.
pub fn can_assign_role(actor: Role, target: Role) -> bool {
    match target {
        Role::Owner => actor == Role::Owner,
        Role::Admin => actor == Role::Owner || actor == Role::Admin,
        Role::Member => has_permission(actor, Permission::MemberInvite),
    }
}

/// Whether `actor` may change the role of a user currently holding
/// `target_current`, optionally to `target_new`.
pub fn can_modify_user_role(actor: Role, target_current: Role, target_new: Option<Role>) -> bool {
    // An OWNER can only be touched by another OWNER.
    if target_current == Role::Owner && actor != Role::Owner {
        return false;
    }

    if let Some(new_role) = target_new {
        if !can_assign_role(actor, new_role) {
            return false;
        }
    }

    has_permission(actor, Permission::MemberUpdateRole)
}

/// Whether `actor` may remove a user holding `target`.
pub fn can_remove_user(actor: Role, target: Role) -> bool {
    if target == Role::Owner && actor != Role::Owner {
        return false;
    }

    has_permission(actor, Permission::MemberRemove)
}

/// Roles that `actor` is allowed to assign, highest first.
pub fn assignable_roles(actor: Role) -> Vec<Role> {
    ALL_ROLES
        .into_iter()
        .filter(|role| can_assign_role(actor, *role))
        .collect()
}

/// A membership mutation subject to policy validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberAction {
    Add,
    UpdateRole,
    Remove,
}

impl MemberAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberAction::Add => "ADD",
            MemberAction::UpdateRole => "UPDATE_ROLE",
            MemberAction::Remove => "REMOVE",
        }
    }
}

/// Outcome of [`validate_member_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionValidity {
    Valid,
    Invalid { reason: String },
}

impl ActionValidity {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The denial reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

/// Validate a member action before dispatching it to the backend.
///
/// Returns a human-readable reason on denial so views can surface it
/// directly.
pub fn validate_member_action(
    actor: Role,
    action: MemberAction,
    target_current: Option<Role>,
    target_new: Option<Role>,
) -> ActionValidity {
    match action {
        MemberAction::Add => {
            if !has_permission(actor, Permission::MemberInvite) {
                return ActionValidity::invalid("Insufficient permissions to invite members");
            }
            if let Some(new_role) = target_new {
                if !can_assign_role(actor, new_role) {
                    return ActionValidity::invalid(format!("Cannot assign role {new_role}"));
                }
            }
        }
        MemberAction::UpdateRole => {
            let (Some(current), Some(new_role)) = (target_current, target_new) else {
                return ActionValidity::invalid("Current and new roles are required");
            };
            if !can_modify_user_role(actor, current, Some(new_role)) {
                return ActionValidity::invalid("Cannot modify this user's role");
            }
        }
        MemberAction::Remove => {
            let Some(current) = target_current else {
                return ActionValidity::invalid("Target user role is required");
            };
            if !can_remove_user(actor, current) {
                return ActionValidity::invalid("Cannot remove this user");
            }
        }
    }

    ActionValidity::Valid
}
