//! Client-side domain error model.

use thiserror::Error;

/// Result type used across the console's non-network layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic, local failure.
///
/// Keep this focused on client-side decisions (validation, policy denials,
/// malformed identifiers). Network/transport failures belong to the client
/// layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed a local check (e.g. empty required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The permission policy denied an action.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced entity is not present in local state.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
