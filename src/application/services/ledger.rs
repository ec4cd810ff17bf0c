//! # Account Ledger
//!
//! Derives available balances from stored balances and open bid exposure.
//!
//! The stored balance only moves at settlement; funds reserved by open
//! bids are *derived* on every query instead of being materialized in a
//! separate column. This avoids double-booking between reserved and
//! settled funds: withdrawing a bid or closing a lot restores available
//! balance automatically because nothing was ever written.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Account;
use crate::domain::value_objects::{AccountId, Money};
use crate::infrastructure::persistence::traits::{AccountRepository, BidRepository};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;

/// Computes available balances.
///
/// Available balance is the stored balance minus the sum of prices of the
/// account's bids on currently open lots. It is a signed quantity: it can
/// be driven to exactly zero, and the bid book checks sufficiency against
/// it before admitting a bid.
#[derive(Debug, Clone)]
pub struct AccountLedger {
    accounts: Arc<dyn AccountRepository>,
    bids: Arc<dyn BidRepository>,
}

impl AccountLedger {
    /// Creates a new ledger over the given repositories.
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountRepository>, bids: Arc<dyn BidRepository>) -> Self {
        Self { accounts, bids }
    }

    /// Returns the account's available balance.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::AccountNotFound`] if the account does
    /// not exist, or a repository error if the query fails.
    #[instrument(skip(self))]
    pub async fn available_balance(&self, account_id: AccountId) -> ApplicationResult<Decimal> {
        let account = self
            .accounts
            .get(account_id)
            .await?
            .ok_or(ApplicationError::AccountNotFound(account_id))?;
        self.available_balance_of(&account).await
    }

    /// Returns the available balance for an already-loaded account.
    pub(crate) async fn available_balance_of(
        &self,
        account: &Account,
    ) -> ApplicationResult<Decimal> {
        let open_bids = self.bids.find_active_by_author(account.id()).await?;
        let exposure = Money::total(open_bids.into_iter().map(|bid| bid.price()))?;
        Ok(account.balance().get() - exposure.get())
    }
}
