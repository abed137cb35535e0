//! Demo binary: wires the HTTP clients into the store, signs in a demo
//! session and renders each view once. With no backends running, the
//! company list falls back to the sample directory and the finance panel
//! shows the recorded error.

use std::sync::Arc;

use anyhow::Result;

use atrium_client::types::User;
use atrium_client::{ApiConfig, CompanyClient, PaymentsClient};
use atrium_console::views::{company_table, finance_dashboard, invitation_panel, member_panel};
use atrium_console::{render, telemetry};
use atrium_rbac::Role;
use atrium_store::{Session, Store};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let config = ApiConfig::from_env();
    tracing::info!(api = %config.api_url, payments = %config.payments_base(), "starting console");

    let company_api = Arc::new(CompanyClient::new(config.api_url.clone()));
    let payments_api = Arc::new(PaymentsClient::from_config(&config));
    let mut store = Store::new(company_api, payments_api);

    let demo_user = User {
        id: "demo-user".into(),
        groups: Vec::new(),
        email: Some("demo@example.com".to_string()),
        name: Some("Demo User".to_string()),
    };
    store.auth.set_auth(Session {
        user: demo_user,
        access_token: "demo-token".to_string(),
        selected_company: None,
        role: Some(Role::Owner),
    });

    let role = store.auth.role().unwrap_or(Role::Member);
    let viewer = store.auth.user().map(|u| u.id.clone()).unwrap_or_default();

    store.fetch_companies().await;
    print!(
        "{}",
        render::render_company_table(&company_table(&store.companies.list, role, ""))
    );

    if let Some(company) = store.companies.list.first().cloned() {
        store.load_members(&company.id).await;
        store.load_invitations(&company.id).await;
        print!(
            "{}",
            render::render_member_panel(&member_panel(&store.members.list, &viewer, role))
        );
        print!(
            "{}",
            render::render_invitation_panel(&invitation_panel(&store.invitations.list, role))
        );
    }

    store.fetch_account().await;
    store.fetch_expenses().await;
    store.fetch_income().await;
    print!(
        "{}",
        render::render_finance_dashboard(&finance_dashboard(&store.finance, true))
    );

    Ok(())
}
