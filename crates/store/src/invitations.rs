//! Pending-invitation slice.

use atrium_client::types::Invitation;
use atrium_client::ApiError;
use atrium_core::{CompanyId, InvitationId};

use crate::Store;

#[derive(Debug, Clone, Default)]
pub struct InvitationSlice {
    pub list: Vec<Invitation>,
    pub loading: bool,
    pub error: Option<String>,
}

impl InvitationSlice {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fulfill(&mut self) {
        self.loading = false;
    }

    fn reject(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }
}

impl Store {
    pub async fn load_invitations(&mut self, company_id: &CompanyId) {
        self.invitations.begin();
        let token = self.token();
        match self
            .company_api
            .list_invitations(company_id, token.as_deref())
            .await
        {
            Ok(list) => {
                self.invitations.list = list;
                self.invitations.fulfill();
            }
            Err(err) => self.invitations.reject(&err),
        }
    }

    pub async fn resend_invitation(
        &mut self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
    ) {
        self.invitations.begin();
        let token = self.token();
        match self
            .company_api
            .resend_invitation(company_id, invitation_id, token.as_deref())
            .await
        {
            Ok(()) => {
                self.invitations.fulfill();
                self.load_invitations(company_id).await;
            }
            Err(err) => self.invitations.reject(&err),
        }
    }

    pub async fn cancel_invitation(
        &mut self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
    ) {
        self.invitations.begin();
        let token = self.token();
        match self
            .company_api
            .cancel_invitation(company_id, invitation_id, token.as_deref())
            .await
        {
            Ok(()) => {
                self.invitations.fulfill();
                self.load_invitations(company_id).await;
            }
            Err(err) => self.invitations.reject(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use atrium_client::types::User;
    use atrium_client::{CompanyApi, InMemoryBackend};
    use atrium_rbac::Role;

    use crate::Session;

    fn owner_store(backend: &InMemoryBackend) -> Store {
        let mut store = Store::new(Arc::new(backend.clone()), Arc::new(backend.clone()));
        store.auth.set_auth(Session {
            user: User {
                id: "owner-1".into(),
                groups: Vec::new(),
                email: None,
                name: None,
            },
            access_token: "tok".to_string(),
            selected_company: None,
            role: Some(Role::Owner),
        });
        store
    }

    #[tokio::test]
    async fn invite_then_cancel_round_trips_through_reloads() {
        let backend = InMemoryBackend::new();
        let company = CompanyId::from("c-1");
        let mut store = owner_store(&backend);

        store
            .invite_member(&company, "new@example.com", Role::Member, Some("welcome"))
            .await;
        assert_eq!(store.invitations.list.len(), 1);
        let invitation_id = store.invitations.list[0].id.clone();

        store.cancel_invitation(&company, &invitation_id).await;
        assert!(store.invitations.list.is_empty());
        assert!(store.invitations.error.is_none());
    }

    #[tokio::test]
    async fn resend_refreshes_the_expiry() {
        let backend = InMemoryBackend::new();
        let company = CompanyId::from("c-1");
        let mut store = owner_store(&backend);
        store
            .invite_member(&company, "new@example.com", Role::Member, None)
            .await;
        let invitation_id = store.invitations.list[0].id.clone();
        let original_expiry = store.invitations.list[0].expires_at;

        store.resend_invitation(&company, &invitation_id).await;

        assert!(store.invitations.list[0].expires_at >= original_expiry);
        assert!(!store.invitations.loading);
    }

    #[tokio::test]
    async fn cancelling_an_unknown_invitation_records_the_error() {
        let backend = InMemoryBackend::new();
        let mut store = owner_store(&backend);

        store
            .cancel_invitation(&"c-1".into(), &"missing".into())
            .await;

        assert!(store.invitations.error.is_some());
        assert!(!store.invitations.loading);
    }

    #[tokio::test]
    async fn accepted_invitations_disappear_from_pending_actions_only_server_side() {
        let backend = InMemoryBackend::new();
        let company = CompanyId::from("c-1");
        let mut store = owner_store(&backend);
        store
            .invite_member(&company, "new@example.com", Role::Member, None)
            .await;

        // The backend flips the status when the token is redeemed.
        let receipt = backend
            .invite_member(&company, "other@example.com", Role::Member, None, None)
            .await
            .unwrap();
        backend
            .accept_invitation(&receipt.invitation_token, None)
            .await
            .unwrap();

        store.load_invitations(&company).await;
        assert_eq!(store.invitations.list.len(), 2);
        assert!(store
            .invitations
            .list
            .iter()
            .any(|i| i.status == atrium_client::types::InvitationStatus::Accepted));
    }
}
