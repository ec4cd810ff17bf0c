//! # Domain Layer
//!
//! Core business types for the pet-auction marketplace.
//!
//! This layer contains the entities ([`entities::Account`],
//! [`entities::Pet`], [`entities::Lot`], [`entities::Bid`]), the value
//! objects they are built from, and the typed domain errors every rule
//! violation is reported as. It has no dependency on persistence or HTTP.

pub mod entities;
pub mod errors;
pub mod value_objects;
