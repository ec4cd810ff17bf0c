//! # Pet Entity
//!
//! A pet record with exclusive, reassignable ownership.

use crate::domain::value_objects::{AccountId, Breed, PetId};
use serde::{Deserialize, Serialize};

/// A pet owned by exactly one account.
///
/// Ownership is reassigned only by the settlement engine when a bid on a
/// lot for this pet is accepted. [`Pet::set_owner`] performs no
/// validation of its own; the caller has already authorized the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    id: PetId,
    name: String,
    breed: Breed,
    owner: AccountId,
}

impl Pet {
    /// Creates a new pet with a fresh ID, owned by `owner`.
    #[must_use]
    pub fn new(name: impl Into<String>, breed: Breed, owner: AccountId) -> Self {
        Self {
            id: PetId::new_v4(),
            name: name.into(),
            breed,
            owner,
        }
    }

    /// Returns the pet ID.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> PetId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the breed.
    #[inline]
    #[must_use]
    pub const fn breed(&self) -> Breed {
        self.breed
    }

    /// Returns the owning account.
    #[inline]
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Reassigns ownership unconditionally.
    ///
    /// Used only by the settlement engine; authorization lives with the
    /// callers that decide a transfer should happen.
    pub fn set_owner(&mut self, new_owner: AccountId) {
        self.owner = new_owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_owner_reassigns() {
        let original = AccountId::new_v4();
        let buyer = AccountId::new_v4();
        let mut pet = Pet::new("Quills", Breed::Hedgehog, original);
        assert_eq!(pet.owner(), original);

        pet.set_owner(buyer);
        assert_eq!(pet.owner(), buyer);
    }
}
