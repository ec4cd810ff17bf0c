//! In-memory [`BidRepository`] implementation.

use crate::domain::entities::Bid;
use crate::domain::value_objects::{AccountId, BidId, LotId};
use crate::infrastructure::persistence::in_memory::{InMemoryStore, Tables};
use crate::infrastructure::persistence::traits::{BidRepository, RepositoryError, RepositoryResult};
use async_trait::async_trait;

fn lot_is_open(tables: &Tables, lot_id: LotId) -> bool {
    tables
        .lots
        .get(&lot_id)
        .is_some_and(|lot| !lot.is_closed())
}

#[async_trait]
impl BidRepository for InMemoryStore {
    async fn insert(&self, bid: &Bid) -> RepositoryResult<()> {
        let mut tables = self.tables().write().await;
        if tables.bids.contains_key(&bid.id()) {
            return Err(RepositoryError::already_exists("Bid", bid.id()));
        }
        // Uniqueness re-check under the write guard: one bid per
        // (bidder, lot) pair.
        if tables
            .bids
            .values()
            .any(|existing| existing.lot_id() == bid.lot_id() && existing.author() == bid.author())
        {
            return Err(RepositoryError::already_exists("Bid", bid.lot_id()));
        }
        tables.bids.insert(bid.id(), bid.clone());
        Ok(())
    }

    async fn get(&self, id: BidId) -> RepositoryResult<Option<Bid>> {
        let tables = self.tables().read().await;
        Ok(tables.bids.get(&id).cloned())
    }

    async fn delete(&self, id: BidId) -> RepositoryResult<bool> {
        let mut tables = self.tables().write().await;
        Ok(tables.bids.remove(&id).is_some())
    }

    async fn find_by_lot(&self, lot_id: LotId) -> RepositoryResult<Vec<Bid>> {
        let tables = self.tables().read().await;
        Ok(tables
            .bids
            .values()
            .filter(|bid| bid.lot_id() == lot_id)
            .cloned()
            .collect())
    }

    async fn find_active(&self) -> RepositoryResult<Vec<Bid>> {
        let tables = self.tables().read().await;
        Ok(tables
            .bids
            .values()
            .filter(|bid| lot_is_open(&tables, bid.lot_id()))
            .cloned()
            .collect())
    }

    async fn find_active_by_author(&self, author: AccountId) -> RepositoryResult<Vec<Bid>> {
        let tables = self.tables().read().await;
        Ok(tables
            .bids
            .values()
            .filter(|bid| bid.author() == author && lot_is_open(&tables, bid.lot_id()))
            .cloned()
            .collect())
    }
}
