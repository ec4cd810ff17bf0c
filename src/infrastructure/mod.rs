//! # Infrastructure Layer
//!
//! Persistence adapters for the domain.

pub mod persistence;
