//! # Use Cases
//!
//! One use case per user-facing operation.
//!
//! Each use case owns its repositories as `Arc<dyn …>` trait objects and
//! performs its rule checks in a fixed order before touching storage, so
//! a rejected operation never writes partial state.

pub mod accept_bid;
pub mod close_lot;
pub mod create_lot;
pub mod create_pet;
pub mod place_bid;
pub mod register_account;
pub mod withdraw_bid;

pub use accept_bid::{AcceptBidRequest, AcceptBidUseCase};
pub use close_lot::{CloseLotRequest, CloseLotUseCase};
pub use create_lot::{CreateLotRequest, CreateLotUseCase};
pub use create_pet::{CreatePetRequest, CreatePetUseCase};
pub use place_bid::{PlaceBidRequest, PlaceBidUseCase};
pub use register_account::{RegisterAccountRequest, RegisterAccountUseCase};
pub use withdraw_bid::{WithdrawBidRequest, WithdrawBidUseCase};

#[cfg(test)]
mod tests;
