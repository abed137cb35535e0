//! Trait seams over the remote backends.
//!
//! The store talks to these traits, never to concrete clients; the HTTP
//! clients implement them for production and [`crate::in_memory`] implements
//! them for tests and offline demos. A `token` is threaded per call because
//! the session token can change at runtime (host auth bridge).

use async_trait::async_trait;

use atrium_core::{CompanyId, ExpenseId, IncomeId, InvitationId, UserId};
use atrium_rbac::{MemberAction, Role};

use crate::error::ApiError;
use crate::types::{
    AcceptedInvitation, Account, Company, CompanyAuthRequest, CompanyAuthResponse, CompanyDraft,
    CreateExpenseRequest, CreateIncomeRequest, CreditAccountRequest, Expense, Income, Invitation,
    InviteReceipt, Member, Transaction,
};

/// Companies, members and invitations (general API).
#[async_trait]
pub trait CompanyApi: Send + Sync {
    async fn list_companies(&self, token: Option<&str>) -> Result<Vec<Company>, ApiError>;

    async fn list_user_companies(&self, token: Option<&str>) -> Result<Vec<Company>, ApiError>;

    async fn get_company(&self, id: &CompanyId, token: Option<&str>) -> Result<Company, ApiError>;

    async fn create_company(
        &self,
        draft: &CompanyDraft,
        token: Option<&str>,
    ) -> Result<Company, ApiError>;

    async fn update_company(
        &self,
        company: &Company,
        token: Option<&str>,
    ) -> Result<Company, ApiError>;

    async fn delete_company(&self, id: &CompanyId, token: Option<&str>) -> Result<(), ApiError>;

    async fn authenticate(
        &self,
        request: &CompanyAuthRequest,
    ) -> Result<CompanyAuthResponse, ApiError>;

    async fn list_members(
        &self,
        company_id: &CompanyId,
        token: Option<&str>,
    ) -> Result<Vec<Member>, ApiError>;

    /// `POST /companies/{id}/members` with `action ∈ ADD/UPDATE_ROLE/REMOVE`.
    async fn manage_member(
        &self,
        company_id: &CompanyId,
        user_id: &UserId,
        action: MemberAction,
        role: Option<Role>,
        token: Option<&str>,
    ) -> Result<(), ApiError>;

    async fn invite_member(
        &self,
        company_id: &CompanyId,
        email: &str,
        role: Role,
        message: Option<&str>,
        token: Option<&str>,
    ) -> Result<InviteReceipt, ApiError>;

    async fn accept_invitation(
        &self,
        invitation_token: &str,
        token: Option<&str>,
    ) -> Result<AcceptedInvitation, ApiError>;

    async fn transfer_ownership(
        &self,
        company_id: &CompanyId,
        new_owner_id: &UserId,
        token: Option<&str>,
    ) -> Result<(), ApiError>;

    async fn list_invitations(
        &self,
        company_id: &CompanyId,
        token: Option<&str>,
    ) -> Result<Vec<Invitation>, ApiError>;

    async fn resend_invitation(
        &self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
        token: Option<&str>,
    ) -> Result<(), ApiError>;

    async fn cancel_invitation(
        &self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
        token: Option<&str>,
    ) -> Result<(), ApiError>;
}

/// Account, expenses and income (payments API).
#[async_trait]
pub trait PaymentsApi: Send + Sync {
    async fn account_balance(&self, token: Option<&str>) -> Result<Account, ApiError>;

    async fn account_transactions(
        &self,
        page: u32,
        limit: u32,
        token: Option<&str>,
    ) -> Result<Vec<Transaction>, ApiError>;

    async fn credit_account(
        &self,
        request: &CreditAccountRequest,
        token: Option<&str>,
    ) -> Result<Account, ApiError>;

    async fn list_expenses(&self, token: Option<&str>) -> Result<Vec<Expense>, ApiError>;

    async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
        token: Option<&str>,
    ) -> Result<Expense, ApiError>;

    async fn update_expense(
        &self,
        id: &ExpenseId,
        expense: &Expense,
        token: Option<&str>,
    ) -> Result<Expense, ApiError>;

    async fn pay_expense(&self, id: &ExpenseId, token: Option<&str>) -> Result<(), ApiError>;

    async fn list_income(&self, token: Option<&str>) -> Result<Vec<Income>, ApiError>;

    async fn create_income(
        &self,
        request: &CreateIncomeRequest,
        token: Option<&str>,
    ) -> Result<Income, ApiError>;

    async fn update_income(
        &self,
        id: &IncomeId,
        income: &Income,
        token: Option<&str>,
    ) -> Result<Income, ApiError>;

    async fn add_income_to_account(
        &self,
        id: &IncomeId,
        token: Option<&str>,
    ) -> Result<(), ApiError>;
}
