//! Member management panel.

use atrium_client::types::Member;
use atrium_core::UserId;
use atrium_rbac::{
    assignable_roles, can_modify_user_role, can_remove_user, has_permission, role_info,
    Permission, Role,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct MemberRow {
    pub user_id: UserId,
    pub role: Role,
    pub role_badge: &'static str,
    pub joined_at: DateTime<Utc>,
    pub is_you: bool,
    pub can_change_role: bool,
    /// Roles this member could be changed to, empty when `can_change_role`
    /// is false.
    pub role_options: Vec<Role>,
    pub can_remove: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberPanel {
    /// MEMBER_READ gates the whole panel.
    pub visible: bool,
    pub rows: Vec<MemberRow>,
    pub can_invite: bool,
    /// Roles offered in the invite form; OWNER is never invitable.
    pub invite_roles: Vec<Role>,
    pub can_transfer: bool,
    /// ACTIVE members other than the viewer, eligible to receive ownership.
    pub transfer_candidates: Vec<UserId>,
}

pub fn member_panel(members: &[Member], viewer: &UserId, viewer_role: Role) -> MemberPanel {
    if !has_permission(viewer_role, Permission::MemberRead) {
        return MemberPanel {
            visible: false,
            rows: Vec::new(),
            can_invite: false,
            invite_roles: Vec::new(),
            can_transfer: false,
            transfer_candidates: Vec::new(),
        };
    }

    let rows: Vec<MemberRow> = members
        .iter()
        .filter(|member| member.is_active())
        .map(|member| {
            let is_you = &member.user_id == viewer;
            let can_change_role =
                !is_you && can_modify_user_role(viewer_role, member.role, None);
            let role_options = if can_change_role {
                assignable_roles(viewer_role)
                    .into_iter()
                    .filter(|role| *role != member.role)
                    .collect()
            } else {
                Vec::new()
            };
            MemberRow {
                user_id: member.user_id.clone(),
                role: member.role,
                role_badge: role_info(member.role).name,
                joined_at: member.joined_at,
                is_you,
                can_change_role,
                role_options,
                can_remove: !is_you && can_remove_user(viewer_role, member.role),
            }
        })
        .collect();

    let can_invite = has_permission(viewer_role, Permission::MemberInvite);
    let invite_roles = if can_invite {
        assignable_roles(viewer_role)
            .into_iter()
            .filter(|role| *role != Role::Owner)
            .collect()
    } else {
        Vec::new()
    };

    let can_transfer = has_permission(viewer_role, Permission::CompanyTransferOwnership);
    let transfer_candidates = if can_transfer {
        members
            .iter()
            .filter(|member| member.is_active() && &member.user_id != viewer)
            .map(|member| member.user_id.clone())
            .collect()
    } else {
        Vec::new()
    };

    MemberPanel {
        visible: true,
        rows,
        can_invite,
        invite_roles,
        can_transfer,
        transfer_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(user_id: &str, role: Role, status: &str) -> Member {
        Member {
            user_id: user_id.into(),
            role,
            status: status.to_string(),
            joined_at: Utc::now(),
        }
    }

    fn roster() -> Vec<Member> {
        vec![
            member("owner-1", Role::Owner, "ACTIVE"),
            member("admin-1", Role::Admin, "ACTIVE"),
            member("member-1", Role::Member, "ACTIVE"),
            member("member-2", Role::Member, "SUSPENDED"),
        ]
    }

    fn row<'a>(panel: &'a MemberPanel, user_id: &str) -> &'a MemberRow {
        panel
            .rows
            .iter()
            .find(|r| r.user_id == user_id.into())
            .unwrap()
    }

    #[test]
    fn only_active_members_are_listed() {
        let panel = member_panel(&roster(), &"owner-1".into(), Role::Owner);
        assert_eq!(panel.rows.len(), 3);
        assert!(panel.rows.iter().all(|r| r.user_id != "member-2".into()));
    }

    #[test]
    fn owner_sees_every_control_except_on_themselves() {
        let panel = member_panel(&roster(), &"owner-1".into(), Role::Owner);

        let you = row(&panel, "owner-1");
        assert!(you.is_you);
        assert!(!you.can_change_role && !you.can_remove);

        let admin = row(&panel, "admin-1");
        assert!(admin.can_change_role && admin.can_remove);
        assert_eq!(admin.role_options, vec![Role::Owner, Role::Member]);
    }

    #[test]
    fn admin_cannot_touch_the_owner_row() {
        let panel = member_panel(&roster(), &"admin-1".into(), Role::Admin);

        let owner = row(&panel, "owner-1");
        assert!(!owner.can_change_role);
        assert!(!owner.can_remove);

        let member = row(&panel, "member-1");
        assert!(member.can_change_role);
        assert!(member.can_remove);
        // ADMIN can re-assign within ADMIN/MEMBER, never OWNER.
        assert_eq!(member.role_options, vec![Role::Admin]);
    }

    #[test]
    fn invite_roles_never_include_owner() {
        let owner_panel = member_panel(&roster(), &"owner-1".into(), Role::Owner);
        assert!(owner_panel.can_invite);
        assert_eq!(owner_panel.invite_roles, vec![Role::Admin, Role::Member]);

        let admin_panel = member_panel(&roster(), &"admin-1".into(), Role::Admin);
        assert_eq!(admin_panel.invite_roles, vec![Role::Admin, Role::Member]);
    }

    #[test]
    fn member_sees_a_read_only_panel() {
        let panel = member_panel(&roster(), &"member-1".into(), Role::Member);
        assert!(panel.visible);
        assert!(!panel.can_invite);
        assert!(panel.invite_roles.is_empty());
        assert!(!panel.can_transfer);
        assert!(panel.rows.iter().all(|r| !r.can_change_role && !r.can_remove));
    }

    #[test]
    fn transfer_candidates_exclude_self_and_inactive_members() {
        let panel = member_panel(&roster(), &"owner-1".into(), Role::Owner);
        assert!(panel.can_transfer);
        assert_eq!(
            panel.transfer_candidates,
            vec![UserId::from("admin-1"), UserId::from("member-1")]
        );

        let admin_panel = member_panel(&roster(), &"admin-1".into(), Role::Admin);
        assert!(!admin_panel.can_transfer);
        assert!(admin_panel.transfer_candidates.is_empty());
    }
}
