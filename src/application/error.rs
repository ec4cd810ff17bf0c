//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures during use case execution: domain rule
//! violations, missing resources, request validation failures, and
//! infrastructure errors. Domain errors keep their stable codes across
//! this layer; everything else is mapped by the API layer.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, BidId, LotId, MoneyError, PetId};
use crate::infrastructure::persistence::traits::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A business rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The caller's account does not exist.
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    /// The referenced pet does not exist.
    #[error("pet not found: {0}")]
    PetNotFound(PetId),

    /// The referenced lot does not exist.
    #[error("lot not found: {0}")]
    LotNotFound(LotId),

    /// The referenced bid does not exist.
    #[error("bid not found: {0}")]
    BidNotFound(BidId),

    /// The requested username is already registered.
    #[error("username already taken: {0}")]
    UsernameTaken(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Monetary arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] MoneyError),

    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns the stable domain error code, if this is a rule violation.
    #[must_use]
    pub const fn domain_code(&self) -> Option<&'static str> {
        match self {
            Self::Domain(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_code() {
        let err: ApplicationError = DomainError::LotExists.into();
        assert_eq!(err.domain_code(), Some("lot_exists"));
        assert_eq!(err.to_string(), "lot for pet already exists");
    }

    #[test]
    fn other_errors_have_no_domain_code() {
        let err = ApplicationError::validation("username must not be empty");
        assert!(err.domain_code().is_none());
    }
}
