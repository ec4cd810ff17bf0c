//! # Repository Traits
//!
//! Storage abstractions, one repository per entity, plus the settlement
//! store that owns the only multi-row atomic commit in the system.
//!
//! Implementations must uphold two uniqueness constraints at insert time
//! (the storage-side re-check of invariants the use cases also verify):
//!
//! - at most one open lot per (pet, author) pair
//! - at most one bid per (bidder, lot) pair

use crate::domain::entities::{Account, Bid, Lot, Pet};
use crate::domain::value_objects::{AccountId, BidId, LotId, PetId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Storage-level error.
///
/// Uniqueness violations and state conflicts are reported distinctly so
/// callers can map them back onto domain errors; everything else is an
/// opaque storage fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The referenced row does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type name.
        entity: &'static str,
        /// The missing identifier.
        id: String,
    },

    /// A uniqueness constraint rejected the insert.
    #[error("{entity} already exists: {id}")]
    AlreadyExists {
        /// Entity type name.
        entity: &'static str,
        /// The conflicting identifier.
        id: String,
    },

    /// The row is in a state that forbids the operation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Underlying storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates an already-exists error.
    #[must_use]
    pub fn already_exists(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::AlreadyExists {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for user accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync + fmt::Debug {
    /// Inserts a new account. Usernames are unique.
    async fn insert(&self, account: &Account) -> RepositoryResult<()>;

    /// Finds an account by ID.
    async fn get(&self, id: AccountId) -> RepositoryResult<Option<Account>>;

    /// Finds an account by username.
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Account>>;
}

/// Repository for pets.
#[async_trait]
pub trait PetRepository: Send + Sync + fmt::Debug {
    /// Inserts a new pet.
    async fn insert(&self, pet: &Pet) -> RepositoryResult<()>;

    /// Finds a pet by ID.
    async fn get(&self, id: PetId) -> RepositoryResult<Option<Pet>>;

    /// Returns all pets owned by the given account.
    async fn find_by_owner(&self, owner: AccountId) -> RepositoryResult<Vec<Pet>>;
}

/// Repository for auction lots.
#[async_trait]
pub trait LotRepository: Send + Sync + fmt::Debug {
    /// Inserts a new lot, re-checking the open-lot uniqueness constraint.
    async fn insert(&self, lot: &Lot) -> RepositoryResult<()>;

    /// Finds a lot by ID.
    async fn get(&self, id: LotId) -> RepositoryResult<Option<Lot>>;

    /// Persists an updated lot.
    async fn update(&self, lot: &Lot) -> RepositoryResult<()>;

    /// Returns all lots currently open.
    async fn find_open(&self) -> RepositoryResult<Vec<Lot>>;

    /// Returns true if an open lot exists for the (pet, author) pair.
    async fn open_exists_for(&self, pet_id: PetId, author: AccountId) -> RepositoryResult<bool>;
}

/// Repository for bids.
#[async_trait]
pub trait BidRepository: Send + Sync + fmt::Debug {
    /// Inserts a new bid, re-checking the one-bid-per-lot constraint.
    async fn insert(&self, bid: &Bid) -> RepositoryResult<()>;

    /// Finds a bid by ID.
    async fn get(&self, id: BidId) -> RepositoryResult<Option<Bid>>;

    /// Deletes a bid, returning true if it existed.
    async fn delete(&self, id: BidId) -> RepositoryResult<bool>;

    /// Returns all bids on the given lot, whatever the lot's status.
    async fn find_by_lot(&self, lot_id: LotId) -> RepositoryResult<Vec<Bid>>;

    /// Returns all bids whose lot is currently open.
    async fn find_active(&self) -> RepositoryResult<Vec<Bid>>;

    /// Returns the given account's bids on currently open lots.
    ///
    /// This is the bid exposure the account ledger subtracts from the
    /// stored balance.
    async fn find_active_by_author(&self, author: AccountId) -> RepositoryResult<Vec<Bid>>;
}

/// Snapshot of the rows written by a committed settlement.
#[derive(Debug, Clone)]
pub struct Settlement {
    /// The accepted bid.
    pub bid: Bid,
    /// The lot, now closed.
    pub lot: Lot,
    /// The pet, now owned by the buyer.
    pub pet: Pet,
    /// The lot author, credited with the bid price.
    pub seller: Account,
    /// The bid author, debited by the bid price.
    pub buyer: Account,
}

/// Atomic multi-row commit for bid acceptance.
///
/// The one place in the system where a single operation mutates more
/// than one row: pet ownership, both balances, and lot status move
/// together or not at all.
#[async_trait]
pub trait SettlementStore: Send + Sync + fmt::Debug {
    /// Atomically settles the given bid.
    ///
    /// Within one transaction: re-checks that the lot is still open,
    /// reassigns the pet to the bid author, credits the lot author,
    /// debits the bid author, and closes the lot. If any step fails the
    /// whole set of mutations rolls back and no partial state is
    /// observable.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::Conflict`] if the lot closed concurrently
    /// - [`RepositoryError::Storage`] if a balance mutation fails;
    ///   nothing is committed in either case
    async fn settle(&self, bid_id: BidId) -> RepositoryResult<Settlement>;
}
