//! # Persistence Layer
//!
//! Repository traits and their implementations.
//!
//! Persistence is an injected capability: the application layer depends
//! only on the traits in [`traits`], never on a concrete store. The
//! shipped implementation is the transactional [`in_memory`] store.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryStore;
pub use traits::{
    AccountRepository, BidRepository, LotRepository, PetRepository, RepositoryError,
    RepositoryResult, Settlement, SettlementStore,
};
