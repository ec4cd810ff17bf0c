//! # Create Lot Use Case
//!
//! Offers an owned pet for auction.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Lot;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, Money, PetId};
use crate::infrastructure::persistence::traits::{LotRepository, PetRepository, RepositoryError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Request to create a lot.
#[derive(Debug, Clone)]
pub struct CreateLotRequest {
    /// The pet being offered.
    pub pet_id: PetId,
    /// The authoring account (the caller).
    pub author: AccountId,
    /// Asking price.
    pub price: Money,
}

impl CreateLotRequest {
    /// Creates a new create-lot request.
    #[must_use]
    pub const fn new(pet_id: PetId, author: AccountId, price: Money) -> Self {
        Self {
            pet_id,
            author,
            price,
        }
    }
}

/// Use case for creating lots.
///
/// Enforces the two lot-creation rules in order: the caller must own the
/// pet, and no open lot may already exist for the (pet, author) pair.
#[derive(Debug, Clone)]
pub struct CreateLotUseCase {
    pets: Arc<dyn PetRepository>,
    lots: Arc<dyn LotRepository>,
}

impl CreateLotUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(pets: Arc<dyn PetRepository>, lots: Arc<dyn LotRepository>) -> Self {
        Self { pets, lots }
    }

    /// Creates an open lot for the given pet.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::PetNotFound`] if the pet is unknown
    /// - [`DomainError::UserNotOwnPet`] if the caller does not own it
    /// - [`DomainError::LotExists`] if an open lot already exists for
    ///   this (pet, author) pair
    #[instrument(skip(self))]
    pub async fn execute(&self, request: CreateLotRequest) -> ApplicationResult<Lot> {
        let pet = self
            .pets
            .get(request.pet_id)
            .await?
            .ok_or(ApplicationError::PetNotFound(request.pet_id))?;

        if pet.owner() != request.author {
            return Err(DomainError::UserNotOwnPet.into());
        }
        if self
            .lots
            .open_exists_for(pet.id(), request.author)
            .await?
        {
            return Err(DomainError::LotExists.into());
        }

        let lot = Lot::new(pet.id(), request.author, request.price);
        match self.lots.insert(&lot).await {
            Ok(()) => {
                info!(lot_id = %lot.id(), pet_id = %pet.id(), "lot opened");
                Ok(lot)
            }
            // The store re-checks open-lot uniqueness under its write guard.
            Err(RepositoryError::AlreadyExists { .. }) => Err(DomainError::LotExists.into()),
            Err(err) => Err(err.into()),
        }
    }
}
