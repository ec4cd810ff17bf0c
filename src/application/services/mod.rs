//! # Application Services
//!
//! Cross-cutting services shared by the use cases.

pub mod ledger;

pub use ledger::AccountLedger;
