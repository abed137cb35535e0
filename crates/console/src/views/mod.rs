//! Pure view-model builders.
//!
//! Each builder reads store state plus the viewer's session role and emits
//! a plain data structure: everything the renderer needs, with permission
//! gating already applied. Builders never talk to the network.

pub mod company_table;
pub mod finance;
pub mod invitation_panel;
pub mod member_panel;

pub use company_table::{company_table, CompanyRow, CompanyTable};
pub use finance::{
    finance_dashboard, validate_credit_input, validate_expense_input, validate_income_input,
    ExpenseRow, FinanceDashboard, IncomeRow,
};
pub use invitation_panel::{invitation_panel, InvitationPanel, InvitationRow};
pub use member_panel::{member_panel, MemberPanel, MemberRow};
