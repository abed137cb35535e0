//! Role identifiers and display metadata.

use serde::{Deserialize, Serialize};

/// Role held by a member within a company.
///
/// The universe of roles is fixed by the backend contract, so this is a
/// closed enum rather than an opaque string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Admin,
    Member,
}

/// All roles, in precedence order (highest first).
pub const ALL_ROLES: [Role; 3] = [Role::Owner, Role::Admin, Role::Member];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a role badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Human-facing name and description for a role.
pub fn role_info(role: Role) -> RoleInfo {
    match role {
        Role::Owner => RoleInfo {
            name: "Owner",
            description:
                "Full access to company management, member management, and ownership transfer",
        },
        Role::Admin => RoleInfo {
            name: "Admin",
            description: "Company management and member management (cannot transfer ownership)",
        },
        Role::Member => RoleInfo {
            name: "Member",
            description: "Read-only access to company information and member list",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_screaming_snake() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"OWNER\"");
        let back: Role = serde_json::from_str("\"MEMBER\"").unwrap();
        assert_eq!(back, Role::Member);
    }

    #[test]
    fn role_info_names_match_roles() {
        assert_eq!(role_info(Role::Owner).name, "Owner");
        assert_eq!(role_info(Role::Admin).name, "Admin");
        assert_eq!(role_info(Role::Member).name, "Member");
    }
}
