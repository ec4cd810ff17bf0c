//! # Domain Entities
//!
//! The four aggregates of the marketplace.
//!
//! - [`Account`]: a user's monetary balance
//! - [`Pet`]: a pet and its current owner
//! - [`Lot`]: a pet offered for auction by its owner
//! - [`Bid`]: a monetary offer against an open lot

pub mod account;
pub mod bid;
pub mod lot;
pub mod pet;

pub use account::Account;
pub use bid::Bid;
pub use lot::Lot;
pub use pet::Pet;
