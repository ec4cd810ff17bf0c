//! # Close Lot Use Case
//!
//! Author closes an open lot.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Lot;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, LotId};
use crate::infrastructure::persistence::traits::LotRepository;
use std::sync::Arc;
use tracing::{info, instrument};

/// Request to close a lot.
#[derive(Debug, Clone)]
pub struct CloseLotRequest {
    /// The lot to close.
    pub lot_id: LotId,
    /// The calling account.
    pub requester: AccountId,
}

impl CloseLotRequest {
    /// Creates a new close-lot request.
    #[must_use]
    pub const fn new(lot_id: LotId, requester: AccountId) -> Self {
        Self { lot_id, requester }
    }
}

/// Use case for closing lots.
///
/// Closing freezes the lot's bids but does not delete them.
#[derive(Debug, Clone)]
pub struct CloseLotUseCase {
    lots: Arc<dyn LotRepository>,
}

impl CloseLotUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(lots: Arc<dyn LotRepository>) -> Self {
        Self { lots }
    }

    /// Closes the lot on behalf of its author.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::LotNotFound`] if the lot is unknown
    /// - [`DomainError::UserIsNotAuthorForLot`] if the caller is not the author
    /// - [`DomainError::LotAlreadyClosed`] if the lot is already closed
    #[instrument(skip(self))]
    pub async fn execute(&self, request: CloseLotRequest) -> ApplicationResult<Lot> {
        let mut lot = self
            .lots
            .get(request.lot_id)
            .await?
            .ok_or(ApplicationError::LotNotFound(request.lot_id))?;

        if lot.author() != request.requester {
            return Err(DomainError::UserIsNotAuthorForLot.into());
        }
        lot.close()?;
        self.lots.update(&lot).await?;

        info!(lot_id = %lot.id(), "lot closed");
        Ok(lot)
    }
}
