//! Company directory table.

use atrium_client::types::{Company, CompanyStatus};
use atrium_rbac::{has_permission, Permission, Role};

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub status_badge: &'static str,
    pub can_edit: bool,
    pub can_delete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyTable {
    pub rows: Vec<CompanyRow>,
    /// Creation is open to every signed-in user.
    pub can_create: bool,
    /// Present only when there is nothing to show; distinguishes an empty
    /// directory from an empty search result.
    pub empty_message: Option<String>,
}

/// Build the table for `viewer_role`, filtered by a case-insensitive
/// substring search over name, address, phone and email.
pub fn company_table(companies: &[Company], viewer_role: Role, search: &str) -> CompanyTable {
    let can_edit = has_permission(viewer_role, Permission::CompanyUpdate);
    let can_delete = has_permission(viewer_role, Permission::CompanyDelete);

    let needle = search.trim().to_lowercase();
    let rows: Vec<CompanyRow> = companies
        .iter()
        .filter(|company| matches_search(company, &needle))
        .map(|company| CompanyRow {
            id: company.id.to_string(),
            name: company.name.clone(),
            address: company.address.clone(),
            phone: company.phone.clone(),
            email: company.email.clone(),
            website: company.website.clone(),
            status_badge: status_badge(company.status),
            can_edit,
            can_delete,
        })
        .collect();

    let empty_message = if !rows.is_empty() {
        None
    } else if companies.is_empty() {
        Some("No companies yet".to_string())
    } else {
        Some(format!("No companies match \"{}\"", search.trim()))
    };

    CompanyTable {
        rows,
        can_create: true,
        empty_message,
    }
}

fn matches_search(company: &Company, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystacks = [
        Some(company.name.as_str()),
        Some(company.address.as_str()),
        Some(company.phone.as_str()),
        company.email.as_deref(),
    ];
    haystacks
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn status_badge(status: CompanyStatus) -> &'static str {
    match status {
        CompanyStatus::Active => "ACTIVE",
        CompanyStatus::Deleted => "DELETED",
    }
}
