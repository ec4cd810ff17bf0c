//! # Lot Status
//!
//! Lot lifecycle state machine.
//!
//! # State Machine
//!
//! ```text
//! Open → Closed
//! ```
//!
//! A lot is created Open and can transition to Closed exactly once,
//! either by its author closing it or by a bid being accepted. Closed is
//! terminal: a closed lot is never reopened.
//!
//! # Examples
//!
//! ```
//! use pet_auction::domain::value_objects::lot_status::LotStatus;
//!
//! let status = LotStatus::Open;
//! assert!(status.can_transition_to(LotStatus::Closed));
//! assert!(!LotStatus::Closed.can_transition_to(LotStatus::Open));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lot lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum LotStatus {
    /// The lot is open and accepts bids.
    #[default]
    Open = 0,

    /// The lot is closed (terminal). Its bids are inert.
    Closed = 1,
}

impl LotStatus {
    /// Returns true if this is a terminal state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true if the given transition is allowed.
    ///
    /// The only legal transition is `Open → Closed`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!((self, target), (Self::Open, Self::Closed))
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        };
        f.write_str(name)
    }
}
