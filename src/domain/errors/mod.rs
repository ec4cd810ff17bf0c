//! # Domain Errors
//!
//! Typed domain error definitions.

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};
