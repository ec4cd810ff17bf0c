//! In-memory [`LotRepository`] implementation.

use crate::domain::entities::Lot;
use crate::domain::value_objects::{AccountId, LotId, PetId};
use crate::infrastructure::persistence::in_memory::{InMemoryStore, Tables};
use crate::infrastructure::persistence::traits::{LotRepository, RepositoryError, RepositoryResult};
use async_trait::async_trait;

fn open_lot_exists(tables: &Tables, pet_id: PetId, author: AccountId) -> bool {
    tables
        .lots
        .values()
        .any(|lot| lot.pet_id() == pet_id && lot.author() == author && !lot.is_closed())
}

#[async_trait]
impl LotRepository for InMemoryStore {
    async fn insert(&self, lot: &Lot) -> RepositoryResult<()> {
        let mut tables = self.tables().write().await;
        if tables.lots.contains_key(&lot.id()) {
            return Err(RepositoryError::already_exists("Lot", lot.id()));
        }
        // Uniqueness re-check under the write guard: at most one open lot
        // per (pet, author) pair.
        if open_lot_exists(&tables, lot.pet_id(), lot.author()) {
            return Err(RepositoryError::already_exists("Lot", lot.pet_id()));
        }
        tables.lots.insert(lot.id(), lot.clone());
        Ok(())
    }

    async fn get(&self, id: LotId) -> RepositoryResult<Option<Lot>> {
        let tables = self.tables().read().await;
        Ok(tables.lots.get(&id).cloned())
    }

    async fn update(&self, lot: &Lot) -> RepositoryResult<()> {
        let mut tables = self.tables().write().await;
        if !tables.lots.contains_key(&lot.id()) {
            return Err(RepositoryError::not_found("Lot", lot.id()));
        }
        tables.lots.insert(lot.id(), lot.clone());
        Ok(())
    }

    async fn find_open(&self) -> RepositoryResult<Vec<Lot>> {
        let tables = self.tables().read().await;
        Ok(tables
            .lots
            .values()
            .filter(|lot| !lot.is_closed())
            .cloned()
            .collect())
    }

    async fn open_exists_for(&self, pet_id: PetId, author: AccountId) -> RepositoryResult<bool> {
        let tables = self.tables().read().await;
        Ok(open_lot_exists(&tables, pet_id, author))
    }
}
