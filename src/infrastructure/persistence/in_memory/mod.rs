//! # In-Memory Store
//!
//! Transactional in-memory implementation of the repository traits.
//!
//! All tables live behind a single `tokio::sync::RwLock`, so a write
//! guard is a transaction: the settlement commit takes one guard across
//! every table it touches, re-checks its invariants under that guard,
//! mutates cloned rows, and writes them back only once every step has
//! succeeded. A failed step therefore leaves no partial state.
//!
//! Suitable for tests and for running the service without an external
//! database.

mod account_repository;
mod bid_repository;
mod lot_repository;
mod pet_repository;

use crate::domain::entities::{Account, Bid, Lot, Pet};
use crate::domain::value_objects::{AccountId, BidId, LotId, PetId};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, Settlement, SettlementStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The table set. One instance shared by every repository facade.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) accounts: HashMap<AccountId, Account>,
    pub(crate) pets: HashMap<PetId, Pet>,
    pub(crate) lots: HashMap<LotId, Lot>,
    pub(crate) bids: HashMap<BidId, Bid>,
}

/// In-memory implementation of every repository trait.
///
/// Cloning is cheap and shares the underlying tables, so the same store
/// can be handed to the application state once per trait object.
///
/// # Examples
///
/// ```
/// use pet_auction::infrastructure::persistence::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let same_tables = store.clone();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    #[cfg(test)]
    fail_next_settlement: Arc<std::sync::atomic::AtomicBool>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tables(&self) -> &Arc<RwLock<Tables>> {
        &self.tables
    }

    /// Makes the next settlement fail right before its write-back, for
    /// exercising rollback behavior.
    #[cfg(test)]
    pub(crate) fn fail_next_settlement(&self) {
        self.fail_next_settlement
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

#[async_trait]
impl SettlementStore for InMemoryStore {
    async fn settle(&self, bid_id: BidId) -> RepositoryResult<Settlement> {
        let mut tables = self.tables.write().await;

        let bid = tables
            .bids
            .get(&bid_id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Bid", bid_id))?;
        let mut lot = tables
            .lots
            .get(&bid.lot_id())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Lot", bid.lot_id()))?;

        // Invariant re-check inside the transaction boundary: a lot that
        // closed since the caller's pre-check must not settle twice.
        if lot.is_closed() {
            return Err(RepositoryError::conflict("lot is already closed"));
        }

        let mut pet = tables
            .pets
            .get(&lot.pet_id())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Pet", lot.pet_id()))?;
        let mut seller = tables
            .accounts
            .get(&lot.author())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Account", lot.author()))?;
        let mut buyer = tables
            .accounts
            .get(&bid.author())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Account", bid.author()))?;

        // Mutate clones only; nothing is visible until the write-back.
        pet.set_owner(bid.author());
        seller
            .credit(bid.price())
            .map_err(|e| RepositoryError::storage(format!("settlement aborted: {e}")))?;
        buyer
            .debit(bid.price())
            .map_err(|e| RepositoryError::storage(format!("settlement aborted: {e}")))?;
        lot.close()
            .map_err(|_| RepositoryError::conflict("lot is already closed"))?;

        #[cfg(test)]
        if self
            .fail_next_settlement
            .swap(false, std::sync::atomic::Ordering::SeqCst)
        {
            return Err(RepositoryError::storage("simulated storage failure"));
        }

        tables.pets.insert(pet.id(), pet.clone());
        tables.accounts.insert(seller.id(), seller.clone());
        tables.accounts.insert(buyer.id(), buyer.clone());
        tables.lots.insert(lot.id(), lot.clone());

        Ok(Settlement {
            bid,
            lot,
            pet,
            seller,
            buyer,
        })
    }
}
