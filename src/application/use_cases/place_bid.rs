//! # Place Bid Use Case
//!
//! Admits a bid against an open lot.
//!
//! The admission checks run in a fixed order, each before any mutation:
//! lot open, not the caller's own lot, no existing bid by the caller,
//! and sufficient available balance. Placing a bid does not touch the
//! stored balance; it only reduces the *derived* available balance for
//! future checks.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::AccountLedger;
use crate::domain::entities::Bid;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, LotId, Money};
use crate::infrastructure::persistence::traits::{
    BidRepository, LotRepository, RepositoryError,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Request to place a bid.
#[derive(Debug, Clone)]
pub struct PlaceBidRequest {
    /// The target lot.
    pub lot_id: LotId,
    /// The bidding account (the caller).
    pub bidder: AccountId,
    /// Offered price.
    pub price: Money,
}

impl PlaceBidRequest {
    /// Creates a new place-bid request.
    #[must_use]
    pub const fn new(lot_id: LotId, bidder: AccountId, price: Money) -> Self {
        Self {
            lot_id,
            bidder,
            price,
        }
    }
}

/// Use case for placing bids.
#[derive(Debug, Clone)]
pub struct PlaceBidUseCase {
    lots: Arc<dyn LotRepository>,
    bids: Arc<dyn BidRepository>,
    ledger: AccountLedger,
}

impl PlaceBidUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(
        lots: Arc<dyn LotRepository>,
        bids: Arc<dyn BidRepository>,
        ledger: AccountLedger,
    ) -> Self {
        Self { lots, bids, ledger }
    }

    /// Places a bid on the given lot.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::LotNotFound`] if the lot is unknown
    /// - [`DomainError::LotAlreadyClosed`] if the lot is closed
    /// - [`DomainError::CannotBidInOwnLot`] if the caller authored the lot
    /// - [`DomainError::OnlyOneBidAllowed`] if the caller already bid here
    /// - [`DomainError::InsufficientBalance`] if the price exceeds the
    ///   caller's available balance
    #[instrument(skip(self))]
    pub async fn execute(&self, request: PlaceBidRequest) -> ApplicationResult<Bid> {
        let lot = self
            .lots
            .get(request.lot_id)
            .await?
            .ok_or(ApplicationError::LotNotFound(request.lot_id))?;

        if lot.is_closed() {
            return Err(DomainError::LotAlreadyClosed.into());
        }
        if lot.author() == request.bidder {
            return Err(DomainError::CannotBidInOwnLot.into());
        }
        let existing = self.bids.find_by_lot(lot.id()).await?;
        if existing.iter().any(|bid| bid.author() == request.bidder) {
            return Err(DomainError::OnlyOneBidAllowed.into());
        }

        // Sufficiency check precedes insertion: the available balance does
        // not yet include the bid being placed.
        let available = self.ledger.available_balance(request.bidder).await?;
        if request.price.get() > available {
            return Err(DomainError::InsufficientBalance.into());
        }

        let bid = Bid::new(lot.id(), request.bidder, request.price);
        match self.bids.insert(&bid).await {
            Ok(()) => {
                info!(bid_id = %bid.id(), lot_id = %lot.id(), "bid placed");
                Ok(bid)
            }
            // The store re-checks the one-bid constraint under its write guard.
            Err(RepositoryError::AlreadyExists { .. }) => {
                Err(DomainError::OnlyOneBidAllowed.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
