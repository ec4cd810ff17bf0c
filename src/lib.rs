//! # Pet Auction Marketplace
//!
//! Backend for a pet-auction marketplace: users list pets for auction
//! ("lots"), other users place monetary bids, and the lot author accepts a
//! bid to transfer pet ownership and settle balances atomically.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Entities, value objects, and typed
//!   domain errors with stable machine-readable codes
//! - **Application Layer** (`application`): Use cases (one per user-facing
//!   operation) and the account ledger service
//! - **Infrastructure Layer** (`infrastructure`): Repository abstractions
//!   and the transactional in-memory store
//! - **API Layer** (`api`): REST interface
//!
//! ## Example
//!
//! ```rust,ignore
//! use pet_auction::application::use_cases::{AcceptBidRequest, AcceptBidUseCase};
//!
//! // Accept a bid: transfers pet ownership, moves funds, closes the lot
//! let settlement = AcceptBidUseCase::new(/* dependencies */)
//!     .execute(AcceptBidRequest::new(bid_id, caller))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
