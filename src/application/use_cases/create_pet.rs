//! # Create Pet Use Case
//!
//! Registers a pet owned by the caller.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Pet;
use crate::domain::value_objects::{AccountId, Breed};
use crate::infrastructure::persistence::traits::{AccountRepository, PetRepository};
use std::sync::Arc;
use tracing::{info, instrument};

/// Request to create a pet.
#[derive(Debug, Clone)]
pub struct CreatePetRequest {
    /// The owning account (the caller).
    pub owner: AccountId,
    /// Display name.
    pub name: String,
    /// Breed.
    pub breed: Breed,
}

impl CreatePetRequest {
    /// Creates a new create-pet request.
    #[must_use]
    pub fn new(owner: AccountId, name: impl Into<String>, breed: Breed) -> Self {
        Self {
            owner,
            name: name.into(),
            breed,
        }
    }
}

/// Use case for creating pets.
#[derive(Debug, Clone)]
pub struct CreatePetUseCase {
    accounts: Arc<dyn AccountRepository>,
    pets: Arc<dyn PetRepository>,
}

impl CreatePetUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self { accounts, pets }
    }

    /// Creates a pet owned by the requesting account.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::AccountNotFound`] if the owner is unknown
    /// - [`ApplicationError::Validation`] if the name is empty
    #[instrument(skip(self))]
    pub async fn execute(&self, request: CreatePetRequest) -> ApplicationResult<Pet> {
        if self.accounts.get(request.owner).await?.is_none() {
            return Err(ApplicationError::AccountNotFound(request.owner));
        }
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ApplicationError::validation("pet name must not be empty"));
        }

        let pet = Pet::new(name, request.breed, request.owner);
        self.pets.insert(&pet).await?;
        info!(pet_id = %pet.id(), owner = %request.owner, "pet created");
        Ok(pet)
    }
}
