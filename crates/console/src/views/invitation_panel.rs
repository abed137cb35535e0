//! Pending-invitation panel.

use atrium_client::types::{Invitation, InvitationStatus};
use atrium_core::InvitationId;
use atrium_rbac::{has_permission, role_info, Permission, Role};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct InvitationRow {
    pub id: InvitationId,
    pub email: String,
    pub role_badge: &'static str,
    pub status_badge: &'static str,
    pub invited_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub can_resend: bool,
    pub can_cancel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvitationPanel {
    pub rows: Vec<InvitationRow>,
}

/// Resend/cancel appear only on PENDING rows, and only for viewers holding
/// MEMBER_INVITE.
pub fn invitation_panel(invitations: &[Invitation], viewer_role: Role) -> InvitationPanel {
    let can_manage = has_permission(viewer_role, Permission::MemberInvite);

    let rows = invitations
        .iter()
        .map(|invitation| {
            let pending = invitation.status == InvitationStatus::Pending;
            InvitationRow {
                id: invitation.id.clone(),
                email: invitation.email.clone(),
                role_badge: role_info(invitation.role).name,
                status_badge: status_badge(invitation.status),
                invited_at: invitation.invited_at,
                expires_at: invitation.expires_at,
                can_resend: can_manage && pending,
                can_cancel: can_manage && pending,
            }
        })
        .collect();

    InvitationPanel { rows }
}

fn status_badge(status: InvitationStatus) -> &'static str {
    match status {
        InvitationStatus::Pending => "PENDING",
        InvitationStatus::Accepted => "ACCEPTED",
        InvitationStatus::Declined => "DECLINED",
        InvitationStatus::Expired => "EXPIRED",
    }
}
