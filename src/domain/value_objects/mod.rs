//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`AccountId`], [`PetId`], [`LotId`], [`BidId`]: UUID-based identifiers
//!
//! ## Numeric Types
//!
//! - [`Money`]: Exact decimal amount with two fractional digits and
//!   checked arithmetic
//!
//! ## Domain Enums
//!
//! - [`Breed`]: Pet breed (cat or hedgehog)
//! - [`LotStatus`]: Lot lifecycle state machine
//!
//! ## Time
//!
//! - [`Timestamp`]: UTC creation timestamp

pub mod breed;
pub mod ids;
pub mod lot_status;
pub mod money;
pub mod timestamp;

pub use breed::{Breed, ParseBreedError};
pub use ids::{AccountId, BidId, LotId, PetId};
pub use lot_status::LotStatus;
pub use money::{Money, MoneyError, MoneyResult};
pub use timestamp::Timestamp;
