//! Financial dashboard: balance card, totals, ledger and action rows.

use atrium_client::types::Transaction;
use atrium_core::{DomainError, DomainResult, ExpenseId, IncomeId};
use atrium_store::FinanceSlice;
use chrono::{DateTime, Utc};

const RECENT_TRANSACTIONS: usize = 5;
const HIDDEN_BALANCE: &str = "••••••";

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub expense_date: DateTime<Utc>,
    pub is_paid: bool,
    pub can_pay: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomeRow {
    pub id: IncomeId,
    pub source: String,
    pub amount: f64,
    pub frequency: String,
    pub can_add_to_account: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceDashboard {
    /// Formatted balance, masked while the show/hide toggle is off.
    pub balance_display: Option<String>,
    pub currency: Option<String>,
    pub total_expenses: f64,
    pub total_income: f64,
    pub unpaid_expense_count: usize,
    pub recent_transactions: Vec<Transaction>,
    pub expense_rows: Vec<ExpenseRow>,
    pub income_rows: Vec<IncomeRow>,
    pub error: Option<String>,
}

pub fn finance_dashboard(finance: &FinanceSlice, show_balance: bool) -> FinanceDashboard {
    let balance_display = finance.account.as_ref().map(|account| {
        if show_balance {
            format!("{:.2}", account.balance)
        } else {
            HIDDEN_BALANCE.to_string()
        }
    });

    let expense_rows: Vec<ExpenseRow> = finance
        .expenses
        .iter()
        .map(|expense| ExpenseRow {
            id: expense.id.clone(),
            description: expense.description.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
            expense_date: expense.expense_date,
            is_paid: expense.is_paid,
            can_pay: !expense.is_paid,
        })
        .collect();

    let income_rows: Vec<IncomeRow> = finance
        .income
        .iter()
        .map(|income| IncomeRow {
            id: income.id.clone(),
            source: income.source.clone(),
            amount: income.amount,
            frequency: income.frequency.as_str().to_string(),
            can_add_to_account: true,
        })
        .collect();

    FinanceDashboard {
        balance_display,
        currency: finance.account.as_ref().map(|a| a.currency.clone()),
        total_expenses: total(finance.expenses.iter().map(|e| e.amount)),
        total_income: total(finance.income.iter().map(|i| i.amount)),
        unpaid_expense_count: finance.expenses.iter().filter(|e| !e.is_paid).count(),
        recent_transactions: finance
            .transactions
            .iter()
            .take(RECENT_TRANSACTIONS)
            .cloned()
            .collect(),
        expense_rows,
        income_rows,
        error: finance.error.clone(),
    }
}

fn total(amounts: impl Iterator<Item = f64>) -> f64 {
    amounts.sum()
}

/// Client-side checks applied before dispatching a new expense.
pub fn validate_expense_input(description: &str, amount: f64) -> DomainResult<()> {
    if description.trim().is_empty() {
        return Err(DomainError::validation("Description is required"));
    }
    if amount <= 0.0 {
        return Err(DomainError::validation("Amount must be greater than zero"));
    }
    Ok(())
}

/// Client-side checks applied before recording income.
pub fn validate_income_input(source: &str, amount: f64) -> DomainResult<()> {
    if source.trim().is_empty() {
        return Err(DomainError::validation("Source is required"));
    }
    if amount <= 0.0 {
        return Err(DomainError::validation("Amount must be greater than zero"));
    }
    Ok(())
}

/// Client-side checks applied before crediting the account.
pub fn validate_credit_input(description: &str, amount: f64) -> DomainResult<()> {
    validate_expense_input(description, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_client::types::{Account, Expense, Frequency, Income};
    use atrium_core::UserId;

    fn expense(description: &str, amount: f64, is_paid: bool) -> Expense {
        Expense {
            id: description.into(),
            user_id: UserId::from("u-1"),
            description: description.to_string(),
            amount,
            category: "general".to_string(),
            expense_date: Utc::now(),
            is_paid,
            related_bill_id: None,
            due_date: None,
        }
    }

    fn income(source: &str, amount: f64) -> Income {
        Income {
            id: source.into(),
            user_id: UserId::from("u-1"),
            source: source.to_string(),
            amount,
            frequency: Frequency::Monthly,
            received_at: Utc::now(),
            category: None,
            is_recurring: true,
            next_due_date: None,
        }
    }

    fn slice() -> FinanceSlice {
        FinanceSlice {
            account: Some(Account {
                user_id: UserId::from("u-1"),
                balance: 1234.5,
                currency: "USD".to_string(),
                last_updated: Utc::now(),
                version: 3,
            }),
            transactions: Vec::new(),
            expenses: vec![
                expense("Hosting", 30.0, true),
                expense("Licenses", 120.0, false),
            ],
            income: vec![income("Consulting", 400.0)],
            loading: false,
            error: None,
        }
    }

    #[test]
    fn balance_is_masked_until_revealed() {
        let dashboard = finance_dashboard(&slice(), false);
        assert_eq!(dashboard.balance_display.as_deref(), Some("••••••"));

        let dashboard = finance_dashboard(&slice(), true);
        assert_eq!(dashboard.balance_display.as_deref(), Some("1234.50"));
        assert_eq!(dashboard.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn totals_and_unpaid_count() {
        let dashboard = finance_dashboard(&slice(), true);
        assert_eq!(dashboard.total_expenses, 150.0);
        assert_eq!(dashboard.total_income, 400.0);
        assert_eq!(dashboard.unpaid_expense_count, 1);
    }

    #[test]
    fn pay_action_only_on_unpaid_expenses() {
        let dashboard = finance_dashboard(&slice(), true);
        let by_description = |d: &str| {
            dashboard
                .expense_rows
                .iter()
                .find(|r| r.description == d)
                .unwrap()
        };
        assert!(!by_description("Hosting").can_pay);
        assert!(by_description("Licenses").can_pay);
    }

    #[test]
    fn input_checks_reject_blank_and_non_positive() {
        assert!(validate_expense_input("Hosting", 10.0).is_ok());
        assert_eq!(
            validate_expense_input("   ", 10.0),
            Err(DomainError::validation("Description is required"))
        );
        assert_eq!(
            validate_expense_input("Hosting", 0.0),
            Err(DomainError::validation("Amount must be greater than zero"))
        );
        assert_eq!(
            validate_income_input("Consulting", -5.0),
            Err(DomainError::validation("Amount must be greater than zero"))
        );
        assert!(validate_credit_input("Top-up", 1.0).is_ok());
    }
}
