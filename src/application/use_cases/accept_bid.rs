//! # Accept Bid Use Case
//!
//! The settlement engine: accepting a bid transfers pet ownership, moves
//! the bid price from buyer to seller, and closes the lot, all in one
//! atomic unit.
//!
//! The authorization and state checks run first, then the whole mutation
//! set is delegated to the [`SettlementStore`], which re-checks the lot
//! state inside its transaction and commits all four mutations or none.
//! Other bids on the lot are not deleted; they become inert because the
//! lot is closed.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, BidId};
use crate::infrastructure::persistence::traits::{
    BidRepository, LotRepository, RepositoryError, Settlement, SettlementStore,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Request to accept a bid.
#[derive(Debug, Clone)]
pub struct AcceptBidRequest {
    /// The bid being accepted.
    pub bid_id: BidId,
    /// The calling account. Must be the author of the bid's lot.
    pub requester: AccountId,
}

impl AcceptBidRequest {
    /// Creates a new accept-bid request.
    #[must_use]
    pub const fn new(bid_id: BidId, requester: AccountId) -> Self {
        Self { bid_id, requester }
    }
}

/// Use case for accepting bids.
#[derive(Debug, Clone)]
pub struct AcceptBidUseCase {
    bids: Arc<dyn BidRepository>,
    lots: Arc<dyn LotRepository>,
    settlements: Arc<dyn SettlementStore>,
}

impl AcceptBidUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(
        bids: Arc<dyn BidRepository>,
        lots: Arc<dyn LotRepository>,
        settlements: Arc<dyn SettlementStore>,
    ) -> Self {
        Self {
            bids,
            lots,
            settlements,
        }
    }

    /// Accepts the bid and settles it atomically.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::BidNotFound`] if the bid is unknown
    /// - [`DomainError::CanOnlyAcceptBidForOwnLot`] if the caller is not
    ///   the lot author
    /// - [`DomainError::LotAlreadyClosed`] if the lot is closed, whether
    ///   detected up front or by the settlement transaction's re-check
    /// - [`ApplicationError::Repository`] if the settlement itself fails;
    ///   the store guarantees nothing was committed
    #[instrument(skip(self))]
    pub async fn execute(&self, request: AcceptBidRequest) -> ApplicationResult<Settlement> {
        let bid = self
            .bids
            .get(request.bid_id)
            .await?
            .ok_or(ApplicationError::BidNotFound(request.bid_id))?;
        let lot = self
            .lots
            .get(bid.lot_id())
            .await?
            .ok_or(ApplicationError::LotNotFound(bid.lot_id()))?;

        if lot.author() != request.requester {
            return Err(DomainError::CanOnlyAcceptBidForOwnLot.into());
        }
        if lot.is_closed() {
            return Err(DomainError::LotAlreadyClosed.into());
        }

        match self.settlements.settle(bid.id()).await {
            Ok(settlement) => {
                info!(
                    bid_id = %settlement.bid.id(),
                    lot_id = %settlement.lot.id(),
                    pet_id = %settlement.pet.id(),
                    price = %settlement.bid.price(),
                    "bid accepted and settled"
                );
                Ok(settlement)
            }
            // A concurrent acceptance or close won the race; to this
            // caller that is simply a closed lot.
            Err(RepositoryError::Conflict(_)) => Err(DomainError::LotAlreadyClosed.into()),
            Err(err) => Err(err.into()),
        }
    }
}
