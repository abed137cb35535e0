//! HTTP client for the general API (companies, members, invitations).

use async_trait::async_trait;
use serde_json::{json, Value};

use atrium_core::{CompanyId, InvitationId, UserId};
use atrium_rbac::{MemberAction, Role};

use crate::api::CompanyApi;
use crate::error::ApiError;
use crate::http::{unwrap_list, Http};
use crate::types::{
    AcceptedInvitation, Company, CompanyAuthRequest, CompanyAuthResponse, CompanyDraft, Invitation,
    InviteReceipt, Member,
};

/// Client for the companies/members/invitations endpoints.
#[derive(Debug, Clone)]
pub struct CompanyClient {
    http: Http,
}

impl CompanyClient {
    /// Build a client against a base URL (e.g. `http://localhost:3001/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Http::new(base_url.into()),
        }
    }
}

#[async_trait]
impl CompanyApi for CompanyClient {
    async fn list_companies(&self, token: Option<&str>) -> Result<Vec<Company>, ApiError> {
        let payload: Value = self
            .http
            .get_json("/companies", token, "fetch companies")
            .await?;
        unwrap_list(payload, "companies")
    }

    async fn list_user_companies(&self, token: Option<&str>) -> Result<Vec<Company>, ApiError> {
        let payload: Value = self
            .http
            .get_json("/companies/user", token, "fetch user companies")
            .await?;
        unwrap_list(payload, "companies")
    }

    async fn get_company(&self, id: &CompanyId, token: Option<&str>) -> Result<Company, ApiError> {
        self.http
            .get_json(&format!("/companies/{id}"), token, "fetch company")
            .await
    }

    async fn create_company(
        &self,
        draft: &CompanyDraft,
        token: Option<&str>,
    ) -> Result<Company, ApiError> {
        self.http
            .post_json("/companies", draft, token, "create company")
            .await
    }

    async fn update_company(
        &self,
        company: &Company,
        token: Option<&str>,
    ) -> Result<Company, ApiError> {
        self.http
            .put_json(
                &format!("/companies/{}", company.id),
                company,
                token,
                "update company",
            )
            .await
    }

    async fn delete_company(&self, id: &CompanyId, token: Option<&str>) -> Result<(), ApiError> {
        self.http
            .delete(&format!("/companies/{id}"), token, "delete company")
            .await
    }

    async fn authenticate(
        &self,
        request: &CompanyAuthRequest,
    ) -> Result<CompanyAuthResponse, ApiError> {
        self.http
            .post_json("/companies/auth", request, None, "authenticate company")
            .await
    }

    async fn list_members(
        &self,
        company_id: &CompanyId,
        token: Option<&str>,
    ) -> Result<Vec<Member>, ApiError> {
        let payload: Value = self
            .http
            .get_json(
                &format!("/companies/{company_id}/members"),
                token,
                "fetch company members",
            )
            .await?;
        unwrap_list(payload, "members")
    }

    async fn manage_member(
        &self,
        company_id: &CompanyId,
        user_id: &UserId,
        action: MemberAction,
        role: Option<Role>,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let body = json!({
            "companyId": company_id,
            "userId": user_id,
            "action": action,
            "role": role,
        });
        self.http
            .post_unit(
                &format!("/companies/{company_id}/members"),
                Some(&body),
                token,
                "manage member",
            )
            .await
    }

    async fn invite_member(
        &self,
        company_id: &CompanyId,
        email: &str,
        role: Role,
        message: Option<&str>,
        token: Option<&str>,
    ) -> Result<InviteReceipt, ApiError> {
        let body = json!({
            "companyId": company_id,
            "email": email,
            "role": role,
            "message": message,
        });
        self.http
            .post_json(
                &format!("/companies/{company_id}/invite"),
                &body,
                token,
                "invite member",
            )
            .await
    }

    async fn accept_invitation(
        &self,
        invitation_token: &str,
        token: Option<&str>,
    ) -> Result<AcceptedInvitation, ApiError> {
        let body = json!({ "token": invitation_token });
        self.http
            .post_json(
                "/companies/invitations/accept",
                &body,
                token,
                "accept invitation",
            )
            .await
    }

    async fn transfer_ownership(
        &self,
        company_id: &CompanyId,
        new_owner_id: &UserId,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let body = json!({ "newOwnerId": new_owner_id });
        self.http
            .post_unit(
                &format!("/companies/{company_id}/transfer-ownership"),
                Some(&body),
                token,
                "transfer ownership",
            )
            .await
    }

    async fn list_invitations(
        &self,
        company_id: &CompanyId,
        token: Option<&str>,
    ) -> Result<Vec<Invitation>, ApiError> {
        let payload: Value = self
            .http
            .get_json(
                &format!("/companies/{company_id}/invitations"),
                token,
                "fetch company invitations",
            )
            .await?;
        unwrap_list(payload, "invitations")
    }

    async fn resend_invitation(
        &self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        self.http
            .post_unit::<Value>(
                &format!("/companies/{company_id}/invitations/{invitation_id}/resend"),
                None,
                token,
                "resend invitation",
            )
            .await
    }

    async fn cancel_invitation(
        &self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        self.http
            .post_unit::<Value>(
                &format!("/companies/{company_id}/invitations/{invitation_id}/cancel"),
                None,
                token,
                "cancel invitation",
            )
            .await
    }
}
