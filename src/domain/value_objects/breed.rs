//! # Breed Value Object
//!
//! The breeds a pet can be registered with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pet breed.
///
/// Serialized in lowercase (`"cat"`, `"hedgehog"`), which is also the
/// wire representation used by the REST API.
///
/// # Examples
///
/// ```
/// use pet_auction::domain::value_objects::breed::Breed;
///
/// let breed: Breed = "hedgehog".parse().unwrap();
/// assert_eq!(breed, Breed::Hedgehog);
/// assert_eq!(breed.to_string(), "hedgehog");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breed {
    /// A cat.
    Cat,
    /// A hedgehog.
    Hedgehog,
}

impl Breed {
    /// Returns the lowercase string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Hedgehog => "hedgehog",
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown breed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown breed: {0}")]
pub struct ParseBreedError(
    /// The unrecognized input.
    pub String,
);

impl FromStr for Breed {
    type Err = ParseBreedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cat" => Ok(Self::Cat),
            "hedgehog" => Ok(Self::Hedgehog),
            other => Err(ParseBreedError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_breeds() {
        assert_eq!("cat".parse::<Breed>().unwrap(), Breed::Cat);
        assert_eq!("hedgehog".parse::<Breed>().unwrap(), Breed::Hedgehog);
    }

    #[test]
    fn parse_unknown_breed_fails() {
        let err = "dog".parse::<Breed>().unwrap_err();
        assert_eq!(err, ParseBreedError("dog".to_string()));
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Breed::Cat).unwrap(), "\"cat\"");
        let back: Breed = serde_json::from_str("\"hedgehog\"").unwrap();
        assert_eq!(back, Breed::Hedgehog);
    }
}
