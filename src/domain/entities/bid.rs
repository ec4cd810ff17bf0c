//! # Bid Entity
//!
//! A monetary offer against an open lot.

use crate::domain::value_objects::{AccountId, BidId, LotId, Money, Timestamp};
use serde::{Deserialize, Serialize};

/// A bid placed by an account on a lot.
///
/// A given account holds at most one bid per lot while the lot is open;
/// the bid store enforces this at insert time. Once the lot closes the
/// bid becomes inert: it can no longer be withdrawn or accepted, but the
/// record persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    id: BidId,
    lot_id: LotId,
    author: AccountId,
    price: Money,
    created_at: Timestamp,
}

impl Bid {
    /// Creates a new bid with a fresh ID.
    #[must_use]
    pub fn new(lot_id: LotId, author: AccountId, price: Money) -> Self {
        Self {
            id: BidId::new_v4(),
            lot_id,
            author,
            price,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the bid ID.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> BidId {
        self.id
    }

    /// Returns the lot this bid targets.
    #[inline]
    #[must_use]
    pub const fn lot_id(&self) -> LotId {
        self.lot_id
    }

    /// Returns the bidding account.
    #[inline]
    #[must_use]
    pub const fn author(&self) -> AccountId {
        self.author
    }

    /// Returns the offered price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the creation timestamp.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
