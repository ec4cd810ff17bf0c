//! # Register Account Use Case
//!
//! Creates a user account with the configured starting balance.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Account;
use crate::domain::value_objects::Money;
use crate::infrastructure::persistence::traits::{AccountRepository, RepositoryError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Request to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterAccountRequest {
    /// The requested username. Must be unique and non-empty.
    pub username: String,
}

impl RegisterAccountRequest {
    /// Creates a new registration request.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Use case for registering accounts.
///
/// The starting balance is configuration, applied uniformly to every new
/// account.
#[derive(Debug, Clone)]
pub struct RegisterAccountUseCase {
    accounts: Arc<dyn AccountRepository>,
    starting_balance: Money,
}

impl RegisterAccountUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountRepository>, starting_balance: Money) -> Self {
        Self {
            accounts,
            starting_balance,
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::Validation`] if the username is empty
    /// - [`ApplicationError::UsernameTaken`] if the username is in use
    #[instrument(skip(self))]
    pub async fn execute(&self, request: RegisterAccountRequest) -> ApplicationResult<Account> {
        let username = request.username.trim();
        if username.is_empty() {
            return Err(ApplicationError::validation("username must not be empty"));
        }
        if self.accounts.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::UsernameTaken(username.to_string()));
        }

        let account = Account::new(username, self.starting_balance);
        match self.accounts.insert(&account).await {
            Ok(()) => {
                info!(account_id = %account.id(), "account registered");
                Ok(account)
            }
            // The store re-checks username uniqueness under its write guard.
            Err(RepositoryError::AlreadyExists { .. }) => {
                Err(ApplicationError::UsernameTaken(username.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
