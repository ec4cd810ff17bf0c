//! # Withdraw Bid Use Case
//!
//! Deletes the caller's bid from an open lot.
//!
//! Withdrawal restores the bidder's available balance automatically:
//! available balance is derived from open bids, so removing the row is
//! the whole operation.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Bid;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, BidId};
use crate::infrastructure::persistence::traits::{BidRepository, LotRepository};
use std::sync::Arc;
use tracing::{info, instrument};

/// Request to withdraw a bid.
#[derive(Debug, Clone)]
pub struct WithdrawBidRequest {
    /// The bid to withdraw.
    pub bid_id: BidId,
    /// The calling account.
    pub requester: AccountId,
}

impl WithdrawBidRequest {
    /// Creates a new withdraw-bid request.
    #[must_use]
    pub const fn new(bid_id: BidId, requester: AccountId) -> Self {
        Self { bid_id, requester }
    }
}

/// Use case for withdrawing bids.
#[derive(Debug, Clone)]
pub struct WithdrawBidUseCase {
    bids: Arc<dyn BidRepository>,
    lots: Arc<dyn LotRepository>,
}

impl WithdrawBidUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(bids: Arc<dyn BidRepository>, lots: Arc<dyn LotRepository>) -> Self {
        Self { bids, lots }
    }

    /// Withdraws the bid, returning the deleted record.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::BidNotFound`] if the bid is unknown
    /// - [`DomainError::UserIsNotAuthorForBid`] if the caller did not place it
    /// - [`DomainError::LotAlreadyClosed`] if the parent lot is closed
    ///   (bids on closed lots are inert)
    #[instrument(skip(self))]
    pub async fn execute(&self, request: WithdrawBidRequest) -> ApplicationResult<Bid> {
        let bid = self
            .bids
            .get(request.bid_id)
            .await?
            .ok_or(ApplicationError::BidNotFound(request.bid_id))?;

        if bid.author() != request.requester {
            return Err(DomainError::UserIsNotAuthorForBid.into());
        }
        let lot = self
            .lots
            .get(bid.lot_id())
            .await?
            .ok_or(ApplicationError::LotNotFound(bid.lot_id()))?;
        if lot.is_closed() {
            return Err(DomainError::LotAlreadyClosed.into());
        }

        self.bids.delete(bid.id()).await?;
        info!(bid_id = %bid.id(), lot_id = %lot.id(), "bid withdrawn");
        Ok(bid)
    }
}
