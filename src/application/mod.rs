//! # Application Layer
//!
//! Use case orchestration and application services.
//!
//! This layer coordinates domain objects to perform business operations.
//! Every user-facing operation is one use case; the only cross-cutting
//! service is the [`services::AccountLedger`], which derives available
//! balances from open bid exposure.
//!
//! ## Use Cases
//!
//! - [`use_cases::RegisterAccountUseCase`]: create an account with the configured starting balance
//! - [`use_cases::CreatePetUseCase`]: register a pet owned by the caller
//! - [`use_cases::CreateLotUseCase`]: offer an owned pet for auction
//! - [`use_cases::CloseLotUseCase`]: author closes an open lot
//! - [`use_cases::PlaceBidUseCase`]: bid on an open lot
//! - [`use_cases::WithdrawBidUseCase`]: withdraw an own bid
//! - [`use_cases::AcceptBidUseCase`]: settle a bid atomically

pub mod error;
pub mod services;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use services::AccountLedger;
pub use use_cases::{
    AcceptBidRequest, AcceptBidUseCase, CloseLotRequest, CloseLotUseCase, CreateLotRequest,
    CreateLotUseCase, CreatePetRequest, CreatePetUseCase, PlaceBidRequest, PlaceBidUseCase,
    RegisterAccountRequest, RegisterAccountUseCase, WithdrawBidRequest, WithdrawBidUseCase,
};
