//! In-memory [`PetRepository`] implementation.

use crate::domain::entities::Pet;
use crate::domain::value_objects::{AccountId, PetId};
use crate::infrastructure::persistence::in_memory::InMemoryStore;
use crate::infrastructure::persistence::traits::{PetRepository, RepositoryError, RepositoryResult};
use async_trait::async_trait;

#[async_trait]
impl PetRepository for InMemoryStore {
    async fn insert(&self, pet: &Pet) -> RepositoryResult<()> {
        let mut tables = self.tables().write().await;
        if tables.pets.contains_key(&pet.id()) {
            return Err(RepositoryError::already_exists("Pet", pet.id()));
        }
        tables.pets.insert(pet.id(), pet.clone());
        Ok(())
    }

    async fn get(&self, id: PetId) -> RepositoryResult<Option<Pet>> {
        let tables = self.tables().read().await;
        Ok(tables.pets.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: AccountId) -> RepositoryResult<Vec<Pet>> {
        let tables = self.tables().read().await;
        Ok(tables
            .pets
            .values()
            .filter(|pet| pet.owner() == owner)
            .cloned()
            .collect())
    }
}
