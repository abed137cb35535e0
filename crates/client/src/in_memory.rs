//! In-memory implementation of both API traits.
//!
//! Serves the same role the in-memory event store does in a full backend
//! deployment: a faithful stand-in for tests and offline demos. State lives
//! behind a mutex so one backend can be shared across clones.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use atrium_core::{CompanyId, ExpenseId, IncomeId, InvitationId, TransactionId, UserId};
use atrium_rbac::{MemberAction, Role};

use crate::api::{CompanyApi, PaymentsApi};
use crate::error::ApiError;
use crate::types::{
    AcceptedInvitation, Account, Company, CompanyAuthRequest, CompanyAuthResponse, CompanyDraft,
    CompanyStatus, CreateExpenseRequest, CreateIncomeRequest, CreditAccountRequest, Expense,
    Income, Invitation, InvitationStatus, InviteReceipt, Member, Transaction, TransactionKind,
    User,
};

#[derive(Debug, Default)]
struct State {
    offline: bool,
    companies: Vec<Company>,
    members: HashMap<CompanyId, Vec<Member>>,
    invitations: HashMap<CompanyId, Vec<Invitation>>,
    invitation_tokens: HashMap<String, (CompanyId, InvitationId)>,
    account: Option<Account>,
    transactions: Vec<Transaction>,
    expenses: Vec<Expense>,
    income: Vec<Income>,
}

/// Shared in-memory backend implementing [`CompanyApi`] and [`PaymentsApi`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<State>>,
}

fn not_found(what: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("{what} not found"),
    }
}

fn offline() -> ApiError {
    ApiError::Network("backend unreachable".to_string())
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with companies.
    pub fn with_companies(companies: Vec<Company>) -> Self {
        let backend = Self::new();
        backend.lock().companies = companies;
        backend
    }

    /// Simulate an unreachable backend: every call fails with a network
    /// error until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    pub fn seed_members(&self, company_id: CompanyId, members: Vec<Member>) {
        self.lock().members.insert(company_id, members);
    }

    pub fn seed_invitations(&self, company_id: CompanyId, invitations: Vec<Invitation>) {
        self.lock().invitations.insert(company_id, invitations);
    }

    pub fn seed_account(&self, account: Account) {
        self.lock().account = Some(account);
    }

    pub fn seed_expenses(&self, expenses: Vec<Expense>) {
        self.lock().expenses = expenses;
    }

    pub fn seed_income(&self, income: Vec<Income>) {
        self.lock().income = income;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, State>, ApiError> {
        let state = self.lock();
        if state.offline {
            return Err(offline());
        }
        Ok(state)
    }
}

#[async_trait]
impl CompanyApi for InMemoryBackend {
    async fn list_companies(&self, _token: Option<&str>) -> Result<Vec<Company>, ApiError> {
        Ok(self.guard()?.companies.clone())
    }

    async fn list_user_companies(&self, token: Option<&str>) -> Result<Vec<Company>, ApiError> {
        self.list_companies(token).await
    }

    async fn get_company(&self, id: &CompanyId, _token: Option<&str>) -> Result<Company, ApiError> {
        self.guard()?
            .companies
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| not_found("company"))
    }

    async fn create_company(
        &self,
        draft: &CompanyDraft,
        _token: Option<&str>,
    ) -> Result<Company, ApiError> {
        let company = Company {
            id: CompanyId::new(),
            name: draft.name.clone(),
            address: draft.address.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            website: draft.website.clone(),
            status: CompanyStatus::Active,
            industry: draft.industry.clone(),
            description: draft.description.clone(),
            logo_url: None,
        };
        self.guard()?.companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(
        &self,
        company: &Company,
        _token: Option<&str>,
    ) -> Result<Company, ApiError> {
        let mut state = self.guard()?;
        let slot = state
            .companies
            .iter_mut()
            .find(|c| c.id == company.id)
            .ok_or_else(|| not_found("company"))?;
        *slot = company.clone();
        Ok(company.clone())
    }

    async fn delete_company(&self, id: &CompanyId, _token: Option<&str>) -> Result<(), ApiError> {
        let mut state = self.guard()?;
        let before = state.companies.len();
        state.companies.retain(|c| &c.id != id);
        if state.companies.len() == before {
            return Err(not_found("company"));
        }
        Ok(())
    }

    async fn authenticate(
        &self,
        request: &CompanyAuthRequest,
    ) -> Result<CompanyAuthResponse, ApiError> {
        let company = self.get_company(&request.company_id, None).await?;
        Ok(CompanyAuthResponse {
            token: format!("in-memory-token-{}", company.id),
            user: User {
                id: UserId::new(),
                groups: Vec::new(),
                email: Some(request.email.clone()),
                name: None,
            },
            company,
        })
    }

    async fn list_members(
        &self,
        company_id: &CompanyId,
        _token: Option<&str>,
    ) -> Result<Vec<Member>, ApiError> {
        Ok(self
            .guard()?
            .members
            .get(company_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn manage_member(
        &self,
        company_id: &CompanyId,
        user_id: &UserId,
        action: MemberAction,
        role: Option<Role>,
        _token: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut state = self.guard()?;
        let members = state.members.entry(company_id.clone()).or_default();
        match action {
            MemberAction::Add => {
                members.push(Member {
                    user_id: user_id.clone(),
                    role: role.unwrap_or(Role::Member),
                    status: "ACTIVE".to_string(),
                    joined_at: Utc::now(),
                });
            }
            MemberAction::UpdateRole => {
                let member = members
                    .iter_mut()
                    .find(|m| &m.user_id == user_id)
                    .ok_or_else(|| not_found("member"))?;
                member.role = role.ok_or_else(|| ApiError::Status {
                    status: 400,
                    message: "role is required for UPDATE_ROLE".to_string(),
                })?;
            }
            MemberAction::Remove => {
                let before = members.len();
                members.retain(|m| &m.user_id != user_id);
                if members.len() == before {
                    return Err(not_found("member"));
                }
            }
        }
        Ok(())
    }

    async fn invite_member(
        &self,
        company_id: &CompanyId,
        email: &str,
        role: Role,
        _message: Option<&str>,
        _token: Option<&str>,
    ) -> Result<InviteReceipt, ApiError> {
        let mut state = self.guard()?;
        let invitation = Invitation {
            id: InvitationId::new(),
            email: email.to_string(),
            role,
            status: InvitationStatus::Pending,
            invited_at: Utc::now(),
            expires_at: Utc::now() + Duration::days(7),
            invited_by: UserId::from("in-memory-inviter"),
        };
        let receipt = InviteReceipt {
            invitation_id: invitation.id.clone(),
            expires_at: invitation.expires_at,
            invitation_token: format!("invite-{}", invitation.id),
        };
        state.invitation_tokens.insert(
            receipt.invitation_token.clone(),
            (company_id.clone(), invitation.id.clone()),
        );
        state
            .invitations
            .entry(company_id.clone())
            .or_default()
            .push(invitation);
        Ok(receipt)
    }

    async fn accept_invitation(
        &self,
        invitation_token: &str,
        _token: Option<&str>,
    ) -> Result<AcceptedInvitation, ApiError> {
        let mut state = self.guard()?;
        let (company_id, invitation_id) = state
            .invitation_tokens
            .remove(invitation_token)
            .ok_or_else(|| not_found("invitation"))?;
        if let Some(invitations) = state.invitations.get_mut(&company_id) {
            if let Some(invitation) = invitations.iter_mut().find(|i| i.id == invitation_id) {
                invitation.status = InvitationStatus::Accepted;
            }
        }
        Ok(AcceptedInvitation { company_id })
    }

    async fn transfer_ownership(
        &self,
        company_id: &CompanyId,
        new_owner_id: &UserId,
        _token: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut state = self.guard()?;
        let members = state
            .members
            .get_mut(company_id)
            .ok_or_else(|| not_found("company"))?;
        if !members.iter().any(|m| &m.user_id == new_owner_id) {
            return Err(not_found("member"));
        }
        for member in members.iter_mut() {
            if member.role == Role::Owner {
                member.role = Role::Admin;
            }
        }
        for member in members.iter_mut() {
            if &member.user_id == new_owner_id {
                member.role = Role::Owner;
            }
        }
        Ok(())
    }

    async fn list_invitations(
        &self,
        company_id: &CompanyId,
        _token: Option<&str>,
    ) -> Result<Vec<Invitation>, ApiError> {
        Ok(self
            .guard()?
            .invitations
            .get(company_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn resend_invitation(
        &self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
        _token: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut state = self.guard()?;
        let invitation = state
            .invitations
            .get_mut(company_id)
            .and_then(|list| list.iter_mut().find(|i| &i.id == invitation_id))
            .ok_or_else(|| not_found("invitation"))?;
        if invitation.status != InvitationStatus::Pending {
            return Err(ApiError::Status {
                status: 409,
                message: "only pending invitations can be resent".to_string(),
            });
        }
        invitation.expires_at = Utc::now() + Duration::days(7);
        Ok(())
    }

    async fn cancel_invitation(
        &self,
        company_id: &CompanyId,
        invitation_id: &InvitationId,
        _token: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut state = self.guard()?;
        let invitations = state
            .invitations
            .get_mut(company_id)
            .ok_or_else(|| not_found("invitation"))?;
        let before = invitations.len();
        invitations.retain(|i| &i.id != invitation_id);
        if invitations.len() == before {
            return Err(not_found("invitation"));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentsApi for InMemoryBackend {
    async fn account_balance(&self, _token: Option<&str>) -> Result<Account, ApiError> {
        self.guard()?
            .account
            .clone()
            .ok_or_else(|| not_found("account"))
    }

    async fn account_transactions(
        &self,
        page: u32,
        limit: u32,
        _token: Option<&str>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let state = self.guard()?;
        let start = (page.saturating_sub(1) as usize) * limit as usize;
        Ok(state
            .transactions
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn credit_account(
        &self,
        request: &CreditAccountRequest,
        _token: Option<&str>,
    ) -> Result<Account, ApiError> {
        let mut state = self.guard()?;
        let account = state.account.as_mut().ok_or_else(|| not_found("account"))?;
        account.balance += request.amount;
        account.version += 1;
        account.last_updated = Utc::now();
        let record = Transaction {
            id: TransactionId::new(),
            user_id: account.user_id.clone(),
            kind: TransactionKind::AccountCredit,
            amount: request.amount,
            description: request.description.clone(),
            category: None,
            created_at: Utc::now(),
            related_id: None,
        };
        let account = account.clone();
        state.transactions.insert(0, record);
        Ok(account)
    }

    async fn list_expenses(&self, _token: Option<&str>) -> Result<Vec<Expense>, ApiError> {
        Ok(self.guard()?.expenses.clone())
    }

    async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
        _token: Option<&str>,
    ) -> Result<Expense, ApiError> {
        let mut state = self.guard()?;
        let user_id = state
            .account
            .as_ref()
            .map(|a| a.user_id.clone())
            .unwrap_or_else(|| UserId::from("in-memory-user"));
        let expense = Expense {
            id: ExpenseId::new(),
            user_id,
            description: request.description.clone(),
            amount: request.amount,
            category: request.category.clone(),
            expense_date: request.expense_date.unwrap_or_else(Utc::now),
            is_paid: false,
            related_bill_id: None,
            due_date: request.due_date,
        };
        state.expenses.push(expense.clone());
        Ok(expense)
    }

    async fn update_expense(
        &self,
        id: &ExpenseId,
        expense: &Expense,
        _token: Option<&str>,
    ) -> Result<Expense, ApiError> {
        let mut state = self.guard()?;
        let slot = state
            .expenses
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| not_found("expense"))?;
        *slot = expense.clone();
        Ok(expense.clone())
    }

    async fn pay_expense(&self, id: &ExpenseId, _token: Option<&str>) -> Result<(), ApiError> {
        let mut state = self.guard()?;
        let expense = state
            .expenses
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| not_found("expense"))?;
        if expense.is_paid {
            return Err(ApiError::Status {
                status: 409,
                message: "expense is already paid".to_string(),
            });
        }
        expense.is_paid = true;
        let (amount, description, related) = (
            expense.amount,
            expense.description.clone(),
            String::from(expense.id.clone()),
        );
        if let Some(account) = state.account.as_mut() {
            account.balance -= amount;
            account.version += 1;
            account.last_updated = Utc::now();
            let record = Transaction {
                id: TransactionId::new(),
                user_id: account.user_id.clone(),
                kind: TransactionKind::Payment,
                amount,
                description,
                category: None,
                created_at: Utc::now(),
                related_id: Some(related),
            };
            state.transactions.insert(0, record);
        }
        Ok(())
    }

    async fn list_income(&self, _token: Option<&str>) -> Result<Vec<Income>, ApiError> {
        Ok(self.guard()?.income.clone())
    }

    async fn create_income(
        &self,
        request: &CreateIncomeRequest,
        _token: Option<&str>,
    ) -> Result<Income, ApiError> {
        let mut state = self.guard()?;
        let user_id = state
            .account
            .as_ref()
            .map(|a| a.user_id.clone())
            .unwrap_or_else(|| UserId::from("in-memory-user"));
        let income = Income {
            id: IncomeId::new(),
            user_id,
            source: request.source.clone(),
            amount: request.amount,
            frequency: request.frequency,
            received_at: request.received_at.unwrap_or_else(Utc::now),
            category: request.category.clone(),
            is_recurring: request.is_recurring,
            next_due_date: request.next_due_date,
        };
        state.income.push(income.clone());
        Ok(income)
    }

    async fn update_income(
        &self,
        id: &IncomeId,
        income: &Income,
        _token: Option<&str>,
    ) -> Result<Income, ApiError> {
        let mut state = self.guard()?;
        let slot = state
            .income
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| not_found("income"))?;
        *slot = income.clone();
        Ok(income.clone())
    }

    async fn add_income_to_account(
        &self,
        id: &IncomeId,
        _token: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut state = self.guard()?;
        let income = state
            .income
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or_else(|| not_found("income"))?;
        if let Some(account) = state.account.as_mut() {
            account.balance += income.amount;
            account.version += 1;
            account.last_updated = Utc::now();
            let record = Transaction {
                id: TransactionId::new(),
                user_id: account.user_id.clone(),
                kind: TransactionKind::Income,
                amount: income.amount,
                description: income.source.clone(),
                category: income.category.clone(),
                created_at: Utc::now(),
                related_id: Some(String::from(income.id.clone())),
            };
            state.transactions.insert(0, record);
        }
        Ok(())
    }
}
