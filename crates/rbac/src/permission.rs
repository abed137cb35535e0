//! Permission identifiers.

use serde::{Deserialize, Serialize};

/// A named capability checked before enabling an action.
///
/// Mirrors the backend's permission names exactly; the serialized form is
/// the wire name (e.g. `"MEMBER_INVITE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // Company management
    CompanyRead,
    CompanyUpdate,
    CompanyDelete,
    CompanyTransferOwnership,

    // Member management
    MemberRead,
    MemberInvite,
    MemberRemove,
    MemberUpdateRole,

    // Role management
    RoleAssignAdmin,
    RoleAssignMember,
    RoleRemoveAdmin,

    // System operations
    ViewAuditLogs,
    ManageCompanySettings,
}

/// Every permission the policy knows about.
pub const ALL_PERMISSIONS: [Permission; 13] = [
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
];

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::CompanyRead => "COMPANY_READ",
            Permission::CompanyUpdate => "COMPANY_UPDATE",
            Permission::CompanyDelete => "COMPANY_DELETE",
            Permission::CompanyTransferOwnership => "COMPANY_TRANSFER_OWNERSHIP",
            Permission::MemberRead => "MEMBER_READ",
            Permission::MemberInvite => "MEMBER_INVITE",
            Permission::MemberRemove => "MEMBER_REMOVE",
            Permission::MemberUpdateRole => "MEMBER_UPDATE_ROLE",
            Permission::RoleAssignAdmin => "ROLE_ASSIGN_ADMIN",
            Permission::RoleAssignMember => "ROLE_ASSIGN_MEMBER",
            Permission::RoleRemoveAdmin => "ROLE_REMOVE_ADMIN",
            Permission::ViewAuditLogs => "VIEW_AUDIT_LOGS",
            Permission::ManageCompanySettings => "MANAGE_COMPANY_SETTINGS",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for perm in ALL_PERMISSIONS {
            let json = serde_json::to_string(&perm).unwrap();
            assert_eq!(json, format!("\"{}\"", perm.as_str()));
            let back: Permission = serde_json::from_str(&json).unwrap();
            assert_eq!(back, perm);
        }
    }
}
