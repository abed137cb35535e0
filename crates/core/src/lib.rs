//! `atrium-core` — shared identifiers and the client-side error model.
//!
//! This crate is intentionally free of HTTP and UI concerns.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CompanyId, ExpenseId, IncomeId, InvitationId, TransactionId, UserId};
