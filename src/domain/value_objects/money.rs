//! # Money Value Object
//!
//! Exact decimal monetary amount with checked arithmetic.
//!
//! This module provides the [`Money`] type, a type-safe wrapper around
//! [`Decimal`] for representing monetary amounts with two fractional
//! digits. Amounts are validated on construction and all arithmetic is
//! checked; no floating point is involved at any point.
//!
//! # Examples
//!
//! ```
//! use pet_auction::domain::value_objects::money::Money;
//!
//! let balance: Money = "100.00".parse().unwrap();
//! let price: Money = "30.00".parse().unwrap();
//!
//! let rest = balance.checked_sub(price).unwrap();
//! assert_eq!(rest.to_string(), "70.00");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised by [`Money`] construction or arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The operation would overflow the decimal range.
    #[error("money overflow")]
    Overflow,

    /// The operation would produce a negative amount.
    #[error("money underflow")]
    Underflow,

    /// The value is not a valid monetary amount.
    #[error("invalid amount: {0}")]
    InvalidValue(&'static str),
}

/// Result type for money operations.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Number of fractional digits carried by every [`Money`] value.
pub const MONEY_SCALE: u32 = 2;

/// A validated monetary amount.
///
/// Represents a non-negative decimal amount with exactly two fractional
/// digits, compared and summed using exact decimal arithmetic.
///
/// # Invariants
///
/// - Amount is always >= 0
/// - Amount carries at most two fractional digits
///
/// # Examples
///
/// ```
/// use pet_auction::domain::value_objects::money::Money;
/// use rust_decimal::Decimal;
///
/// let amount = Money::from_decimal(Decimal::new(10050, 2)).unwrap();
/// assert_eq!(amount.to_string(), "100.50");
///
/// // Negative amounts are rejected
/// assert!(Money::from_decimal(Decimal::new(-1, 0)).is_err());
///
/// // More than two fractional digits are rejected
/// assert!(Money::from_decimal(Decimal::new(12345, 3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero amount constant.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a money amount from a [`Decimal`] value.
    ///
    /// The value is normalized to two fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidValue`] if the value is negative or
    /// carries more than two fractional digits.
    #[must_use = "this returns a Result that should be handled"]
    pub fn from_decimal(value: Decimal) -> MoneyResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::InvalidValue("amount cannot be negative"));
        }
        let mut normalized = value.normalize();
        if normalized.scale() > MONEY_SCALE {
            return Err(MoneyError::InvalidValue(
                "amount cannot have more than two fractional digits",
            ));
        }
        normalized.rescale(MONEY_SCALE);
        Ok(Self(normalized))
    }

    /// Creates a zero amount.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the inner [`Decimal`] value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Safely adds another amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the result would overflow.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Safely subtracts another amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Underflow`] if the result would be negative.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_sub(self, rhs: Self) -> MoneyResult<Self> {
        let result = self.0.checked_sub(rhs.0).ok_or(MoneyError::Underflow)?;
        if result.is_sign_negative() && !result.is_zero() {
            return Err(MoneyError::Underflow);
        }
        Ok(Self(result))
    }

    /// Sums an iterator of amounts with overflow checking.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the running total overflows.
    pub fn total<I>(amounts: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, Self::checked_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(amount: Money) -> Self {
        amount.0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s).map_err(|_| MoneyError::InvalidValue("invalid decimal"))?;
        Self::from_decimal(decimal)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn from_decimal_positive_succeeds() {
            let amount = Money::from_decimal(Decimal::new(10050, 2)).unwrap();
            assert_eq!(amount.get(), Decimal::new(10050, 2));
        }

        #[test]
        fn from_decimal_negative_fails() {
            let result = Money::from_decimal(Decimal::new(-100, 2));
            assert!(matches!(result, Err(MoneyError::InvalidValue(_))));
        }

        #[test]
        fn from_decimal_three_fractional_digits_fails() {
            let result = Money::from_decimal(Decimal::new(12345, 3));
            assert!(matches!(result, Err(MoneyError::InvalidValue(_))));
        }

        #[test]
        fn whole_number_is_normalized_to_two_digits() {
            let amount = Money::from_decimal(Decimal::new(100, 0)).unwrap();
            assert_eq!(amount.to_string(), "100.00");
        }

        #[test]
        fn trailing_zeros_do_not_trip_precision_check() {
            // 1.230 normalizes to 1.23 before the scale check
            let amount = Money::from_decimal(Decimal::new(1230, 3)).unwrap();
            assert_eq!(amount.to_string(), "1.23");
        }

        #[test]
        fn from_str_works() {
            assert_eq!(money("100.50").get(), Decimal::new(10050, 2));
        }

        #[test]
        fn from_str_negative_fails() {
            let result: Result<Money, _> = "-100".parse();
            assert!(result.is_err());
        }

        #[test]
        fn from_str_garbage_fails() {
            let result: Result<Money, _> = "a lot".parse();
            assert_eq!(result, Err(MoneyError::InvalidValue("invalid decimal")));
        }

        #[test]
        fn zero_constant() {
            assert!(Money::ZERO.is_zero());
            assert_eq!(Money::zero(), Money::ZERO);
            assert_eq!(Money::default(), Money::ZERO);
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn checked_add_works() {
            let sum = money("70.00").checked_add(money("30.00")).unwrap();
            assert_eq!(sum, money("100.00"));
        }

        #[test]
        fn checked_sub_works() {
            let rest = money("100.00").checked_sub(money("30.00")).unwrap();
            assert_eq!(rest, money("70.00"));
        }

        #[test]
        fn checked_sub_to_exactly_zero_succeeds() {
            let rest = money("50.00").checked_sub(money("50.00")).unwrap();
            assert!(rest.is_zero());
        }

        #[test]
        fn checked_sub_underflow_fails() {
            let result = money("30.00").checked_sub(money("30.01"));
            assert_eq!(result, Err(MoneyError::Underflow));
        }

        #[test]
        fn total_sums_amounts() {
            let amounts = vec![money("50.00"), money("30.00"), money("0.01")];
            assert_eq!(Money::total(amounts).unwrap(), money("80.01"));
        }

        #[test]
        fn total_of_empty_is_zero() {
            assert_eq!(Money::total(vec![]).unwrap(), Money::ZERO);
        }
    }

    mod comparison {
        use super::*;

        #[test]
        fn ordering_works() {
            assert!(money("29.99") < money("30.00"));
            assert!(money("30.00") > money("0.01"));
        }

        #[test]
        fn equality_ignores_representation() {
            assert_eq!(money("30"), money("30.00"));
        }
    }

    mod serde_repr {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let amount = money("100.50");
            let json = serde_json::to_string(&amount).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, amount);
        }

        #[test]
        fn deserialize_negative_fails() {
            let result: Result<Money, _> = serde_json::from_str("\"-10.00\"");
            assert!(result.is_err());
        }
    }

    mod properties {
        use super::*;

        proptest! {
            #[test]
            fn add_then_sub_roundtrips(a in 0u64..1_000_000, b in 0u64..1_000_000) {
                let a = Money::from_decimal(Decimal::new(a as i64, 2)).unwrap();
                let b = Money::from_decimal(Decimal::new(b as i64, 2)).unwrap();
                let roundtrip = a.checked_add(b).unwrap().checked_sub(b).unwrap();
                prop_assert_eq!(roundtrip, a);
            }

            #[test]
            fn sub_never_returns_negative(a in 0u64..1_000_000, b in 0u64..1_000_000) {
                let a = Money::from_decimal(Decimal::new(a as i64, 2)).unwrap();
                let b = Money::from_decimal(Decimal::new(b as i64, 2)).unwrap();
                match a.checked_sub(b) {
                    Ok(rest) => prop_assert!(!rest.get().is_sign_negative() || rest.is_zero()),
                    Err(err) => prop_assert_eq!(err, MoneyError::Underflow),
                }
            }
        }
    }
}
