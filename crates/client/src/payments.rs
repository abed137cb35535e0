//! HTTP client for the payments API (account, expenses, income).

use async_trait::async_trait;
use serde_json::Value;

use atrium_core::{ExpenseId, IncomeId};

use crate::api::PaymentsApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{unwrap_list, Http};
use crate::types::{
    Account, CreateExpenseRequest, CreateIncomeRequest, CreditAccountRequest, Expense, Income,
    Transaction,
};

/// Client for the payments endpoints.
///
/// Expects a base that already carries the `/payment/v1` mount prefix; use
/// [`PaymentsClient::from_config`] to build one.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    http: Http,
}

impl PaymentsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Http::new(base_url.into()),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.payments_base())
    }
}

#[async_trait]
impl PaymentsApi for PaymentsClient {
    async fn account_balance(&self, token: Option<&str>) -> Result<Account, ApiError> {
        self.http
            .get_json(
                "/payments/account/balance",
                token,
                "fetch account balance",
            )
            .await
    }

    async fn account_transactions(
        &self,
        page: u32,
        limit: u32,
        token: Option<&str>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let payload: Value = self
            .http
            .get_json(
                &format!("/payments/account/transactions?page={page}&limit={limit}"),
                token,
                "fetch transactions",
            )
            .await?;
        unwrap_list(payload, "transactions")
    }

    async fn credit_account(
        &self,
        request: &CreditAccountRequest,
        token: Option<&str>,
    ) -> Result<Account, ApiError> {
        self.http
            .post_json("/payments/account/credit", request, token, "credit account")
            .await
    }

    async fn list_expenses(&self, token: Option<&str>) -> Result<Vec<Expense>, ApiError> {
        let payload: Value = self
            .http
            .get_json("/payments/expenses", token, "fetch expenses")
            .await?;
        unwrap_list(payload, "expenses")
    }

    async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
        token: Option<&str>,
    ) -> Result<Expense, ApiError> {
        self.http
            .post_json("/payments/expenses", request, token, "create expense")
            .await
    }

    async fn update_expense(
        &self,
        id: &ExpenseId,
        expense: &Expense,
        token: Option<&str>,
    ) -> Result<Expense, ApiError> {
        self.http
            .put_json(
                &format!("/payments/expenses/{id}"),
                expense,
                token,
                "update expense",
            )
            .await
    }

    async fn pay_expense(&self, id: &ExpenseId, token: Option<&str>) -> Result<(), ApiError> {
        self.http
            .post_unit::<Value>(
                &format!("/payments/expenses/{id}/pay"),
                None,
                token,
                "pay expense",
            )
            .await
    }

    async fn list_income(&self, token: Option<&str>) -> Result<Vec<Income>, ApiError> {
        let payload: Value = self
            .http
            .get_json("/payments/income", token, "fetch income")
            .await?;
        unwrap_list(payload, "income")
    }

    async fn create_income(
        &self,
        request: &CreateIncomeRequest,
        token: Option<&str>,
    ) -> Result<Income, ApiError> {
        self.http
            .post_json("/payments/income", request, token, "record income")
            .await
    }

    async fn update_income(
        &self,
        id: &IncomeId,
        income: &Income,
        token: Option<&str>,
    ) -> Result<Income, ApiError> {
        self.http
            .put_json(
                &format!("/payments/income/{id}"),
                income,
                token,
                "update income",
            )
            .await
    }

    async fn add_income_to_account(
        &self,
        id: &IncomeId,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        self.http
            .post_unit::<Value>(
                &format!("/payments/income/{id}/add-to-account"),
                None,
                token,
                "add income to account",
            )
            .await
    }
}
