//! Company membership slice.
//!
//! Mutations are pre-validated through the permission policy so an
//! ill-authorized request never leaves the client; on success the list is
//! reloaded rather than patched (backend authoritative).

use atrium_client::types::Member;
use atrium_client::ApiError;
use atrium_core::{CompanyId, UserId};
use atrium_rbac::{
    has_permission, validate_member_action, MemberAction, Permission, Role,
};

use crate::Store;

const NO_SESSION: &str = "No active company session";

#[derive(Debug, Clone, Default)]
pub struct MemberSlice {
    pub list: Vec<Member>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MemberSlice {
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

    fn deny(&mut self, reason: impl Into<String>) {
        self.loading = false;
        self.error = Some(reason.into());
    }
}

impl Store {
    pub async fn load_members(&mut self, company_id: &CompanyId) {
        self.members.begin();
        let token = self.token();
        match self
            .company_api
            .list_members(company_id, token.as_deref())
            .await
        {
            Ok(list) => {
                self.members.list = list;
                self.members.fulfill();
            }
            Err(err) => self.members.reject(&err),
        }
    }

    /// Invite a user; the pending invitation list is reloaded on success.
    pub async fn invite_member(
        &mut self,
        company_id: &CompanyId,
        email: &str,
        role: Role,
        message: Option<&str>,
    ) {
        let Some(actor) = self.auth.role() else {
            self.members.deny(NO_SESSION);
            return;
        };
        let verdict = validate_member_action(actor, MemberAction::Add, None, Some(role));
        if let Some(reason) = verdict.reason() {
            self.members.deny(reason);
            return;
        }

        self.members.begin();
        let token = self.token();
        match self
            .company_api
            .invite_member(company_id, email, role, message, token.as_deref())
            .await
        {
            Ok(_receipt) => {
                self.members.fulfill();
                self.load_invitations(company_id).await;
            }
            Err(err) => self.members.reject(&err),
        }
    }

    pub async fn update_member_role(
        &mut self,
        company_id: &CompanyId,
        user_id: &UserId,
        current_role: Role,
        new_role: Role,
    ) {
        let Some(actor) = self.auth.role() else {
            self.members.deny(NO_SESSION);
            return;
        };
        let verdict = validate_member_action(
            actor,
            MemberAction::UpdateRole,
            Some(current_role),
            Some(new_role),
        );
        if let Some(reason) = verdict.reason() {
            self.members.deny(reason);
            return;
        }

        self.members.begin();
        let token = self.token();
        match self
            .company_api
            .manage_member(
                company_id,
                user_id,
                MemberAction::UpdateRole,
                Some(new_role),
                token.as_deref(),
            )
            .await
        {
            Ok(()) => {
                self.members.fulfill();
                self.load_members(company_id).await;
            }
            Err(err) => self.members.reject(&err),
        }
    }

    pub async fn remove_member(
        &mut self,
        company_id: &CompanyId,
        user_id: &UserId,
        current_role: Role,
    ) {
        let Some(actor) = self.auth.role() else {
            self.members.deny(NO_SESSION);
            return;
        };
        let verdict =
            validate_member_action(actor, MemberAction::Remove, Some(current_role), None);
        if let Some(reason) = verdict.reason() {
            self.members.deny(reason);
            return;
        }
        if self.is_last_owner(user_id, current_role) {
            self.members
                .deny("Cannot remove the last owner of the company");
            return;
        }

        self.members.begin();
        let token = self.token();
        match self
            .company_api
            .manage_member(
                company_id,
                user_id,
                MemberAction::Remove,
                None,
                token.as_deref(),
            )
            .await
        {
            Ok(()) => {
                self.members.fulfill();
                self.load_members(company_id).await;
            }
            Err(err) => self.members.reject(&err),
        }
    }

    pub async fn transfer_company_ownership(
        &mut self,
        company_id: &CompanyId,
        new_owner_id: &UserId,
    ) {
        let Some(actor) = self.auth.role() else {
            self.members.deny(NO_SESSION);
            return;
        };
        if !has_permission(actor, Permission::CompanyTransferOwnership) {
            self.members
                .deny("Insufficient permissions to transfer ownership");
            return;
        }

        self.members.begin();
        let token = self.token();
        match self
            .company_api
            .transfer_ownership(company_id, new_owner_id, token.as_deref())
            .await
        {
            Ok(()) => {
                self.members.fulfill();
                self.load_members(company_id).await;
            }
            Err(err) => self.members.reject(&err),
        }
    }

    /// Removing yourself as the only OWNER would orphan the company.
    fn is_last_owner(&self, user_id: &UserId, current_role: Role) -> bool {
        if current_role != Role::Owner {
            return false;
        }
        let is_self = self.auth.user().is_some_and(|u| &u.id == user_id);
        let other_owners = self
            .members
            .list
            .iter()
            .filter(|m| m.role == Role::Owner && &m.user_id != user_id)
            .count();
        is_self && other_owners == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use atrium_client::types::User;
    use atrium_client::{CompanyApi, InMemoryBackend};
    use chrono::Utc;

    use crate::Session;

    fn member(user_id: &str, role: Role) -> Member {
        Member {
            user_id: user_id.into(),
            role,
            status: "ACTIVE".to_string(),
            joined_at: Utc::now(),
        }
    }

    fn store_as(backend: &InMemoryBackend, user_id: &str, role: Role) -> Store {
        let mut store = Store::new(Arc::new(backend.clone()), Arc::new(backend.clone()));
        store.auth.set_auth(Session {
            user: User {
                id: user_id.into(),
                groups: Vec::new(),
                email: None,
                name: None,
            },
            access_token: "tok".to_string(),
            selected_company: None,
            role: Some(role),
        });
        store
    }

    fn seeded_backend(company: &str) -> InMemoryBackend {
        let backend = InMemoryBackend::new();
        backend.seed_members(
            company.into(),
            vec![member("owner-1", Role::Owner), member("member-1", Role::Member)],
        );
        backend
    }

    #[tokio::test]
    async fn member_invites_are_denied_locally_with_the_policy_reason() {
        let backend = seeded_backend("c-1");
        let mut store = store_as(&backend, "member-1", Role::Member);

        store
            .invite_member(&"c-1".into(), "new@example.com", Role::Member, None)
            .await;

        assert_eq!(
            store.members.error.as_deref(),
            Some("Insufficient permissions to invite members")
        );
        // Nothing reached the backend.
        let invitations = backend.list_invitations(&"c-1".into(), None).await.unwrap();
        assert!(invitations.is_empty());
    }

    #[tokio::test]
    async fn admin_cannot_demote_the_owner() {
        let backend = seeded_backend("c-1");
        let mut store = store_as(&backend, "admin-1", Role::Admin);
        store.load_members(&"c-1".into()).await;

        store
            .update_member_role(&"c-1".into(), &"owner-1".into(), Role::Owner, Role::Member)
            .await;

        assert_eq!(
            store.members.error.as_deref(),
            Some("Cannot modify this user's role")
        );
    }

    #[tokio::test]
    async fn removal_reloads_the_member_list() {
        let backend = seeded_backend("c-1");
        let mut store = store_as(&backend, "owner-1", Role::Owner);
        store.load_members(&"c-1".into()).await;
        assert_eq!(store.members.list.len(), 2);

        store
            .remove_member(&"c-1".into(), &"member-1".into(), Role::Member)
            .await;

        assert_eq!(store.members.list.len(), 1);
        assert!(store.members.error.is_none());
        assert!(!store.members.loading);
    }

    #[tokio::test]
    async fn the_last_owner_cannot_remove_themselves() {
        let backend = seeded_backend("c-1");
        let mut store = store_as(&backend, "owner-1", Role::Owner);
        store.load_members(&"c-1".into()).await;

        store
            .remove_member(&"c-1".into(), &"owner-1".into(), Role::Owner)
            .await;

        assert_eq!(
            store.members.error.as_deref(),
            Some("Cannot remove the last owner of the company")
        );
        assert_eq!(store.members.list.len(), 2);
    }

    #[tokio::test]
    async fn ownership_transfer_requires_the_permission() {
        let backend = seeded_backend("c-1");
        let mut store = store_as(&backend, "admin-1", Role::Admin);

        store
            .transfer_company_ownership(&"c-1".into(), &"member-1".into())
            .await;

        assert_eq!(
            store.members.error.as_deref(),
            Some("Insufficient permissions to transfer ownership")
        );
    }

    #[tokio::test]
    async fn ownership_transfer_by_the_owner_reloads_roles() {
        let backend = seeded_backend("c-1");
        let mut store = store_as(&backend, "owner-1", Role::Owner);
        store.load_members(&"c-1".into()).await;

        store
            .transfer_company_ownership(&"c-1".into(), &"member-1".into())
            .await;

        let roles: Vec<_> = store
            .members
            .list
            .iter()
            .map(|m| (m.user_id.as_str().to_string(), m.role))
            .collect();
        assert!(roles.contains(&("member-1".to_string(), Role::Owner)));
        assert!(roles.contains(&("owner-1".to_string(), Role::Admin)));
    }
}
