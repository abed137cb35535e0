//! Personal-finance slice: account balance, transactions, expenses, income.
//!
//! Every successful mutation refetches the lists it touched; balances are
//! never adjusted locally.

use atrium_client::types::{
    Account, CreateExpenseRequest, CreateIncomeRequest, CreditAccountRequest, Expense, Income,
    Transaction,
};
use atrium_client::ApiError;
use atrium_core::{ExpenseId, IncomeId};

use crate::Store;

pub const DEFAULT_TRANSACTION_PAGE: u32 = 1;
pub const DEFAULT_TRANSACTION_LIMIT: u32 = 20;

#[derive(Debug, Clone, Default)]
pub struct FinanceSlice {
    pub account: Option<Account>,
    pub transactions: Vec<Transaction>,
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FinanceSlice {
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
    pub async fn fetch_account(&mut self) {
        self.finance.begin();
        let token = self.token();
        match self.payments_api.account_balance(token.as_deref()).await {
            Ok(account) => {
                self.finance.account = Some(account);
                self.finance.fulfill();
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    pub async fn fetch_transactions(&mut self, page: u32, limit: u32) {
        self.finance.begin();
        let token = self.token();
        match self
            .payments_api
            .account_transactions(page, limit, token.as_deref())
            .await
        {
            Ok(transactions) => {
                self.finance.transactions = transactions;
                self.finance.fulfill();
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    pub async fn fetch_expenses(&mut self) {
        self.finance.begin();
        let token = self.token();
        match self.payments_api.list_expenses(token.as_deref()).await {
            Ok(expenses) => {
                self.finance.expenses = expenses;
                self.finance.fulfill();
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    pub async fn fetch_income(&mut self) {
        self.finance.begin();
        let token = self.token();
        match self.payments_api.list_income(token.as_deref()).await {
            Ok(income) => {
                self.finance.income = income;
                self.finance.fulfill();
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    pub async fn credit_account(&mut self, request: &CreditAccountRequest) {
        self.finance.begin();
        let token = self.token();
        match self
            .payments_api
            .credit_account(request, token.as_deref())
            .await
        {
            Ok(account) => {
                self.finance.account = Some(account);
                self.finance.fulfill();
                self.fetch_transactions(DEFAULT_TRANSACTION_PAGE, DEFAULT_TRANSACTION_LIMIT)
                    .await;
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    pub async fn create_expense(&mut self, request: &CreateExpenseRequest) {
        self.finance.begin();
        let token = self.token();
        match self
            .payments_api
            .create_expense(request, token.as_deref())
            .await
        {
            Ok(_created) => {
                self.finance.fulfill();
                self.fetch_expenses().await;
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    /// Pay an expense, then refetch everything the payment touched.
    pub async fn pay_expense(&mut self, id: &ExpenseId) {
        self.finance.begin();
        let token = self.token();
        match self.payments_api.pay_expense(id, token.as_deref()).await {
            Ok(()) => {
                self.finance.fulfill();
                self.fetch_expenses().await;
                self.fetch_account().await;
                self.fetch_transactions(DEFAULT_TRANSACTION_PAGE, DEFAULT_TRANSACTION_LIMIT)
                    .await;
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    pub async fn create_income(&mut self, request: &CreateIncomeRequest) {
        self.finance.begin();
        let token = self.token();
        match self
            .payments_api
            .create_income(request, token.as_deref())
            .await
        {
            Ok(_created) => {
                self.finance.fulfill();
                self.fetch_income().await;
            }
            Err(err) => self.finance.reject(&err),
        }
    }

    pub async fn add_income_to_account(&mut self, id: &IncomeId) {
        self.finance.begin();
        let token = self.token();
        match self
            .payments_api
            .add_income_to_account(id, token.as_deref())
            .await
        {
            Ok(()) => {
                self.finance.fulfill();
                self.fetch_account().await;
                self.fetch_transactions(DEFAULT_TRANSACTION_PAGE, DEFAULT_TRANSACTION_LIMIT)
                    .await;
            }
            Err(err) => self.finance.reject(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use atrium_client::types::{Frequency, TransactionKind};
    use atrium_client::InMemoryBackend;
    use atrium_core::UserId;
    use chrono::Utc;

    fn seeded_backend() -> InMemoryBackend {
        let backend = InMemoryBackend::new();
        backend.seed_account(Account {
            user_id: UserId::from("u-1"),
            balance: 500.0,
            currency: "USD".to_string(),
            last_updated: Utc::now(),
            version: 1,
        });
        backend
    }

    fn store_over(backend: &InMemoryBackend) -> Store {
        Store::new(Arc::new(backend.clone()), Arc::new(backend.clone()))
    }

    #[tokio::test]
    async fn crediting_refreshes_balance_and_transactions() {
        let backend = seeded_backend();
        let mut store = store_over(&backend);

        store
            .credit_account(&CreditAccountRequest {
                amount: 100.0,
                description: "Top-up".to_string(),
            })
            .await;

        assert_eq!(store.finance.account.as_ref().unwrap().balance, 600.0);
        assert_eq!(store.finance.transactions.len(), 1);
        assert_eq!(
            store.finance.transactions[0].kind,
            TransactionKind::AccountCredit
        );
        assert!(!store.finance.loading);
    }

    #[tokio::test]
    async fn paying_an_expense_refetches_expenses_account_and_transactions() {
        let backend = seeded_backend();
        let mut store = store_over(&backend);
        store
            .create_expense(&CreateExpenseRequest {
                description: "Hosting".to_string(),
                amount: 50.0,
                category: "infra".to_string(),
                expense_date: None,
                due_date: None,
            })
            .await;
        let id = store.finance.expenses[0].id.clone();

        store.pay_expense(&id).await;

        assert!(store.finance.expenses[0].is_paid);
        assert_eq!(store.finance.account.as_ref().unwrap().balance, 450.0);
        assert_eq!(store.finance.transactions[0].kind, TransactionKind::Payment);
    }

    #[tokio::test]
    async fn recorded_income_can_be_added_to_the_account() {
        let backend = seeded_backend();
        let mut store = store_over(&backend);
        store
            .create_income(&CreateIncomeRequest {
                source: "Consulting".to_string(),
                amount: 250.0,
                frequency: Frequency::OneTime,
                received_at: None,
                category: None,
                is_recurring: false,
                next_due_date: None,
            })
            .await;
        let id = store.finance.income[0].id.clone();

        store.add_income_to_account(&id).await;

        assert_eq!(store.finance.account.as_ref().unwrap().balance, 750.0);
        assert_eq!(store.finance.transactions[0].kind, TransactionKind::Income);
    }

    #[tokio::test]
    async fn a_missing_account_is_an_error_not_a_crash() {
        let backend = InMemoryBackend::new();
        let mut store = store_over(&backend);

        store.fetch_account().await;

        assert!(store.finance.account.is_none());
        assert!(store.finance.error.is_some());
        assert!(!store.finance.loading);
    }
}
