//! # Domain Errors
//!
//! Typed rule-violation errors with stable machine-readable codes.
//!
//! Every business-rule violation in the marketplace is one of these
//! variants. Each carries a stable snake_case code that the REST layer
//! returns verbatim, so clients can match on `code` without parsing
//! messages.
//!
//! # Error Categories
//!
//! - **ownership**: the caller is not allowed to act on the resource
//! - **state**: the resource is in a state that forbids the operation
//! - **business**: a marketplace rule rejects the operation
//!
//! # Examples
//!
//! ```
//! use pet_auction::domain::errors::DomainError;
//!
//! let error = DomainError::LotAlreadyClosed;
//! assert_eq!(error.code(), "lot_already_closed");
//! assert_eq!(error.category(), "state");
//! ```

use thiserror::Error;

/// Domain-level rule violation.
///
/// All variants are caller-input/authorization errors detected before any
/// mutation; none are transient infrastructure faults. Each maps to a
/// stable code via [`DomainError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Ownership errors
    // ========================================================================
    /// The caller does not own the pet being listed.
    #[error("user is not owner of the pet")]
    UserNotOwnPet,

    /// The caller is not the author of the lot.
    #[error("user is not author for the lot")]
    UserIsNotAuthorForLot,

    /// The caller is not the author of the bid.
    #[error("user is not an author for bid")]
    UserIsNotAuthorForBid,

    /// Only the lot author may accept a bid on it.
    #[error("user can only accept bid for his lot")]
    CanOnlyAcceptBidForOwnLot,

    /// Lot authors may not bid on their own lots.
    #[error("user cannot place bid in his lot")]
    CannotBidInOwnLot,

    // ========================================================================
    // State errors
    // ========================================================================
    /// An open lot already exists for this pet and author.
    #[error("lot for pet already exists")]
    LotExists,

    /// The lot is already closed.
    #[error("lot is already closed")]
    LotAlreadyClosed,

    // ========================================================================
    // Business-rule errors
    // ========================================================================
    /// The bidder already has a bid on this lot.
    #[error("user can place only one bid in a lot")]
    OnlyOneBidAllowed,

    /// The bid price exceeds the bidder's available balance.
    #[error("not enough money to place bid")]
    InsufficientBalance,
}

impl DomainError {
    /// Returns the stable machine-readable error code.
    ///
    /// Codes are part of the API contract and never change.
    ///
    /// # Examples
    ///
    /// ```
    /// use pet_auction::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::LotExists.code(), "lot_exists");
    /// assert_eq!(DomainError::InsufficientBalance.code(), "insufficient_balance");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UserNotOwnPet => "user_not_own_pet",
            Self::UserIsNotAuthorForLot => "user_is_not_author_for_lot",
            Self::UserIsNotAuthorForBid => "user_is_not_author_for_bid",
            Self::CanOnlyAcceptBidForOwnLot => "can_only_accept_bid_for_own_lot",
            Self::CannotBidInOwnLot => "cannot_bid_in_own_lot",
            Self::LotExists => "lot_exists",
            Self::LotAlreadyClosed => "lot_already_closed",
            Self::OnlyOneBidAllowed => "only_one_bid_allowed",
            Self::InsufficientBalance => "insufficient_balance",
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UserNotOwnPet
            | Self::UserIsNotAuthorForLot
            | Self::UserIsNotAuthorForBid
            | Self::CanOnlyAcceptBidForOwnLot
            | Self::CannotBidInOwnLot => "ownership",
            Self::LotExists | Self::LotAlreadyClosed => "state",
            Self::OnlyOneBidAllowed | Self::InsufficientBalance => "business",
        }
    }

    /// Returns true if this is an ownership/authorization error.
    #[inline]
    #[must_use]
    pub const fn is_ownership_error(&self) -> bool {
        matches!(
            self,
            Self::UserNotOwnPet
                | Self::UserIsNotAuthorForLot
                | Self::UserIsNotAuthorForBid
                | Self::CanOnlyAcceptBidForOwnLot
                | Self::CannotBidInOwnLot
        )
    }

    /// Returns true if this is a lot-state error.
    #[inline]
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self, Self::LotExists | Self::LotAlreadyClosed)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
