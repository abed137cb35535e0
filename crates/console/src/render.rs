//! Plain-text rendering of the view models, for the demo binary.

use std::fmt::Write as _;

use crate::views::{CompanyTable, FinanceDashboard, InvitationPanel, MemberPanel};

pub fn render_company_table(table: &CompanyTable) -> String {
    let mut out = String::from("Companies\n");
    if let Some(message) = &table.empty_message {
        let _ = writeln!(out, "  {message}");
        return out;
    }
    for row in &table.rows {
        let mut actions = Vec::new();
        if row.can_edit {
            actions.push("edit");
        }
        if row.can_delete {
            actions.push("delete");
        }
        let _ = writeln!(
            out,
            "  {:<28} {:<40} {:<18} [{}] {}",
            row.name,
            row.address,
            row.phone,
            row.status_badge,
            actions.join("/"),
        );
    }
    out
}

pub fn render_member_panel(panel: &MemberPanel) -> String {
    if !panel.visible {
        return "Members: access denied\n".to_string();
    }
    let mut out = String::from("Members\n");
    for row in &panel.rows {
        let you = if row.is_you { " (you)" } else { "" };
        let mut actions = Vec::new();
        if row.can_change_role {
            actions.push("change-role");
        }
        if row.can_remove {
            actions.push("remove");
        }
        let _ = writeln!(
            out,
            "  {:<24} {:<8} joined {}{you} {}",
            row.user_id,
            row.role_badge,
            row.joined_at.format("%Y-%m-%d"),
            actions.join("/"),
        );
    }
    if panel.can_invite {
        let roles: Vec<&str> = panel.invite_roles.iter().map(|r| r.as_str()).collect();
        let _ = writeln!(out, "  invite: {}", roles.join(", "));
    }
    out
}

pub fn render_invitation_panel(panel: &InvitationPanel) -> String {
    let mut out = String::from("Invitations\n");
    if panel.rows.is_empty() {
        out.push_str("  none pending\n");
        return out;
    }
    for row in &panel.rows {
        let mut actions = Vec::new();
        if row.can_resend {
            actions.push("resend");
        }
        if row.can_cancel {
            actions.push("cancel");
        }
        let _ = writeln!(
            out,
            "  {:<32} {:<8} [{}] expires {} {}",
            row.email,
            row.role_badge,
            row.status_badge,
            row.expires_at.format("%Y-%m-%d"),
            actions.join("/"),
        );
    }
    out
}

pub fn render_finance_dashboard(dashboard: &FinanceDashboard) -> String {
    let mut out = String::from("Finance\n");
    if let Some(error) = &dashboard.error {
        let _ = writeln!(out, "  error: {error}");
    }
    match (&dashboard.balance_display, &dashboard.currency) {
        (Some(balance), Some(currency)) => {
            let _ = writeln!(out, "  balance: {balance} {currency}");
        }
        _ => out.push_str("  balance: unavailable\n"),
    }
    let _ = writeln!(
        out,
        "  expenses: {:.2} ({} unpaid)   income: {:.2}",
        dashboard.total_expenses, dashboard.unpaid_expense_count, dashboard.total_income,
    );
    for transaction in &dashboard.recent_transactions {
        let _ = writeln!(
            out,
            "  {:<14} {:>10.2}  {}",
            format!("{:?}", transaction.kind),
            transaction.amount,
            transaction.description,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{company_table, member_panel};
    use atrium_client::sample_companies;
    use atrium_rbac::Role;

    #[test]
    fn company_table_rendering_lists_rows_or_the_empty_message() {
        let companies = sample_companies();
        let rendered = render_company_table(&company_table(&companies, Role::Owner, ""));
        assert!(rendered.contains("Tech Solutions Ltd"));
        assert!(rendered.contains("edit/delete"));

        let rendered = render_company_table(&company_table(&[], Role::Owner, ""));
        assert!(rendered.contains("No companies yet"));
    }

    #[test]
    fn member_panel_rendering_marks_the_viewer() {
        use atrium_client::types::Member;
        use chrono::Utc;

        let members = vec![Member {
            user_id: "owner-1".into(),
            role: Role::Owner,
            status: "ACTIVE".to_string(),
            joined_at: Utc::now(),
        }];
        let rendered = render_member_panel(&member_panel(&members, &"owner-1".into(), Role::Owner));
        assert!(rendered.contains("(you)"));
        assert!(rendered.contains("invite: ADMIN, MEMBER"));
    }
}
