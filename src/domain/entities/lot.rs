//! # Lot Entity
//!
//! An auction lot: one pet offered for sale by its owner.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AccountId, LotId, LotStatus, Money, PetId, Timestamp};
use serde::{Deserialize, Serialize};

/// A pet offered for auction.
///
/// Created in the [`LotStatus::Open`] state; transitions to
/// [`LotStatus::Closed`] exactly once via [`Lot::close`]. Closed is
/// terminal. At most one open lot exists per (pet, author) pair, which
/// the lot store enforces at insert time.
///
/// # Examples
///
/// ```
/// use pet_auction::domain::entities::Lot;
/// use pet_auction::domain::errors::DomainError;
/// use pet_auction::domain::value_objects::{AccountId, PetId};
///
/// let mut lot = Lot::new(PetId::new_v4(), AccountId::new_v4(), "25.00".parse().unwrap());
/// assert!(!lot.is_closed());
///
/// lot.close().unwrap();
/// assert_eq!(lot.close(), Err(DomainError::LotAlreadyClosed));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    id: LotId,
    pet_id: PetId,
    author: AccountId,
    price: Money,
    status: LotStatus,
    created_at: Timestamp,
}

impl Lot {
    /// Creates a new open lot with a fresh ID.
    #[must_use]
    pub fn new(pet_id: PetId, author: AccountId, price: Money) -> Self {
        Self {
            id: LotId::new_v4(),
            pet_id,
            author,
            price,
            status: LotStatus::Open,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the lot ID.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> LotId {
        self.id
    }

    /// Returns the offered pet's ID.
    #[inline]
    #[must_use]
    pub const fn pet_id(&self) -> PetId {
        self.pet_id
    }

    /// Returns the authoring account.
    #[inline]
    #[must_use]
    pub const fn author(&self) -> AccountId {
        self.author
    }

    /// Returns the asking price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the current status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> LotStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns true if the lot is closed.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Transitions the lot to Closed.
    ///
    /// Closing has no side effects on the lot's bids beyond freezing
    /// further mutation against them.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::LotAlreadyClosed`] if the lot is already
    /// closed.
    pub fn close(&mut self) -> DomainResult<()> {
        if !self.status.can_transition_to(LotStatus::Closed) {
            return Err(DomainError::LotAlreadyClosed);
        }
        self.status = LotStatus::Closed;
        Ok(())
    }
}
