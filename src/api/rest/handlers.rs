//! # REST Handlers
//!
//! Request handlers for the REST endpoints.
//!
//! # Endpoints
//!
//! ## Accounts
//! - `POST /api/v1/register` - Register an account
//!
//! ## Pets
//! - `GET /api/v1/pets` - List the caller's pets
//! - `POST /api/v1/pets` - Create a pet owned by the caller
//!
//! ## Lots
//! - `GET /api/v1/lots` - List open lots
//! - `POST /api/v1/lots` - Offer an owned pet for auction
//! - `GET /api/v1/lots/{id}/bids` - List active bids on a lot
//! - `POST /api/v1/lots/{id}/close` - Author closes an own lot
//!
//! ## Bids
//! - `GET /api/v1/bids` - List active bids
//! - `POST /api/v1/bids` - Place a bid
//! - `DELETE /api/v1/bids/{id}` - Withdraw an own bid
//! - `POST /api/v1/bids/{id}/accept` - Accept a bid and settle
//!
//! The caller is identified by the `x-account-id` header, set by the
//! upstream authentication gateway. Every rule violation maps to HTTP 400
//! with the stable domain error code in the response body.

use crate::application::error::ApplicationError;
use crate::application::use_cases::{
    accept_bid, close_lot, create_lot, create_pet, place_bid, register_account, withdraw_bid,
    AcceptBidUseCase, CloseLotUseCase, CreateLotUseCase, CreatePetUseCase, PlaceBidUseCase,
    RegisterAccountUseCase, WithdrawBidUseCase,
};
use crate::application::AccountLedger;
use crate::domain::entities::{Account, Bid, Lot, Pet};
use crate::domain::value_objects::{AccountId, Breed, LotId, Money};
use crate::infrastructure::persistence::traits::{
    AccountRepository, BidRepository, LotRepository, PetRepository, RepositoryError, Settlement,
    SettlementStore,
};
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Account repository, for lookups the list handlers perform directly.
    pub accounts: Arc<dyn AccountRepository>,
    /// Pet repository.
    pub pets: Arc<dyn PetRepository>,
    /// Lot repository.
    pub lots: Arc<dyn LotRepository>,
    /// Bid repository.
    pub bids: Arc<dyn BidRepository>,
    /// Account registration.
    pub register_account: RegisterAccountUseCase,
    /// Pet creation.
    pub create_pet: CreatePetUseCase,
    /// Lot creation.
    pub create_lot: CreateLotUseCase,
    /// Lot closing.
    pub close_lot: CloseLotUseCase,
    /// Bid placement.
    pub place_bid: PlaceBidUseCase,
    /// Bid withdrawal.
    pub withdraw_bid: WithdrawBidUseCase,
    /// Bid acceptance (settlement).
    pub accept_bid: AcceptBidUseCase,
}

impl AppState {
    /// Wires the application state over the given repositories.
    #[must_use]
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        pets: Arc<dyn PetRepository>,
        lots: Arc<dyn LotRepository>,
        bids: Arc<dyn BidRepository>,
        settlements: Arc<dyn SettlementStore>,
        starting_balance: Money,
    ) -> Self {
        let ledger = AccountLedger::new(accounts.clone(), bids.clone());
        Self {
            register_account: RegisterAccountUseCase::new(accounts.clone(), starting_balance),
            create_pet: CreatePetUseCase::new(accounts.clone(), pets.clone()),
            create_lot: CreateLotUseCase::new(pets.clone(), lots.clone()),
            close_lot: CloseLotUseCase::new(lots.clone()),
            place_bid: PlaceBidUseCase::new(lots.clone(), bids.clone(), ledger),
            withdraw_bid: WithdrawBidUseCase::new(bids.clone(), lots.clone()),
            accept_bid: AcceptBidUseCase::new(bids.clone(), lots.clone(), settlements),
            accounts,
            pets,
            lots,
            bids,
        }
    }
}

// ============================================================================
// Error Response
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The rejection type shared by every handler.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<ApplicationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ApplicationError) -> Self {
        let (status, code) = match &err {
            // Rule violations keep their stable codes and are always 400.
            ApplicationError::Domain(domain) => (StatusCode::BAD_REQUEST, domain.code()),
            // A caller whose account does not exist is not a marketplace
            // participant, whatever the gateway authenticated.
            ApplicationError::AccountNotFound(_) => (StatusCode::FORBIDDEN, "account_not_found"),
            ApplicationError::PetNotFound(_)
            | ApplicationError::LotNotFound(_)
            | ApplicationError::BidNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApplicationError::UsernameTaken(_) => (StatusCode::BAD_REQUEST, "username_taken"),
            ApplicationError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApplicationError::Arithmetic(_) | ApplicationError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        // Infrastructure faults stay opaque to the client.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "internal error");
            "internal server error".to_string()
        } else {
            err.to_string()
        };

        (status, Json(ErrorResponse::new(code, message)))
    }
}

// ============================================================================
// Caller Extraction
// ============================================================================

/// Header carrying the authenticated caller's account id.
pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

/// The authenticated caller, extracted from [`ACCOUNT_ID_HEADER`].
///
/// Authentication itself happens upstream; this extractor only rejects
/// requests the gateway forwarded without a parsable account id.
#[derive(Debug, Clone, Copy)]
pub struct Caller(
    /// The caller's account id.
    pub AccountId,
);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACCOUNT_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(|uuid| Self(AccountId::new(uuid)))
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new(
                        "unauthorized",
                        format!("missing or invalid {ACCOUNT_ID_HEADER} header"),
                    )),
                )
            })
    }
}

/// Loads the caller's account, rejecting callers without one.
async fn require_account(state: &AppState, caller: Caller) -> Result<Account, ApiError> {
    state
        .accounts
        .get(caller.0)
        .await
        .map_err(ApplicationError::from)?
        .ok_or_else(|| ApplicationError::AccountNotFound(caller.0).into())
}

// ============================================================================
// Account DTOs
// ============================================================================

/// Request to register an account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Requested username.
    pub username: String,
}

/// Account response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account ID. Callers pass this back in the `x-account-id` header.
    pub id: String,
    /// Username.
    pub username: String,
    /// Stored balance.
    pub balance: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            username: account.username().to_string(),
            balance: account.balance().to_string(),
        }
    }
}

// ============================================================================
// Pet DTOs
// ============================================================================

/// Request to create a pet.
#[derive(Debug, Clone, Deserialize)]
pub struct PetCreateRequest {
    /// Display name.
    pub name: String,
    /// Breed (`"cat"` or `"hedgehog"`).
    pub breed: Breed,
}

/// Pet response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetResponse {
    /// Pet ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Breed.
    pub breed: Breed,
}

impl From<&Pet> for PetResponse {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id().to_string(),
            name: pet.name().to_string(),
            breed: pet.breed(),
        }
    }
}

// ============================================================================
// Lot DTOs
// ============================================================================

/// Request to create a lot.
#[derive(Debug, Clone, Deserialize)]
pub struct LotCreateRequest {
    /// The pet to offer.
    pub pet_id: Uuid,
    /// Asking price.
    pub price: Money,
}

/// Lot response DTO, embedding the offered pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotResponse {
    /// Lot ID.
    pub id: String,
    /// The offered pet.
    pub pet: PetResponse,
    /// Asking price.
    pub price: String,
    /// Author username.
    pub author: String,
    /// Lot status.
    pub status: String,
}

impl LotResponse {
    fn new(lot: &Lot, pet: &Pet, author: &str) -> Self {
        Self {
            id: lot.id().to_string(),
            pet: PetResponse::from(pet),
            price: lot.price().to_string(),
            author: author.to_string(),
            status: lot.status().to_string(),
        }
    }
}

// ============================================================================
// Bid DTOs
// ============================================================================

/// Request to place a bid.
#[derive(Debug, Clone, Deserialize)]
pub struct BidCreateRequest {
    /// The target lot.
    pub lot_id: Uuid,
    /// Offered price.
    pub price: Money,
}

/// Short bid response DTO, used when the lot is implied by the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidResponse {
    /// Bid ID.
    pub id: String,
    /// Offered price.
    pub price: String,
    /// Bidder username.
    pub author: String,
}

impl BidResponse {
    fn new(bid: &Bid, author: &str) -> Self {
        Self {
            id: bid.id().to_string(),
            price: bid.price().to_string(),
            author: author.to_string(),
        }
    }
}

/// Full bid response DTO, embedding the target lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidDetailResponse {
    /// Bid ID.
    pub id: String,
    /// Offered price.
    pub price: String,
    /// Bidder username.
    pub author: String,
    /// The lot this bid targets.
    pub lot: LotResponse,
}

impl BidDetailResponse {
    fn new(bid: &Bid, author: &str, lot: LotResponse) -> Self {
        Self {
            id: bid.id().to_string(),
            price: bid.price().to_string(),
            author: author.to_string(),
            lot,
        }
    }
}

/// Response for an accepted bid: the settled trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResponse {
    /// The accepted bid's ID.
    pub bid_id: String,
    /// The closed lot.
    pub lot: LotResponse,
    /// Settled price.
    pub price: String,
    /// The buyer (new pet owner) username.
    pub buyer: String,
    /// The seller username.
    pub seller: String,
}

impl From<&Settlement> for SettlementResponse {
    fn from(settlement: &Settlement) -> Self {
        Self {
            bid_id: settlement.bid.id().to_string(),
            lot: LotResponse::new(
                &settlement.lot,
                &settlement.pet,
                settlement.seller.username(),
            ),
            price: settlement.bid.price().to_string(),
            buyer: settlement.buyer.username().to_string(),
            seller: settlement.seller.username().to_string(),
        }
    }
}

// ============================================================================
// Display Helpers
// ============================================================================

/// Resolves the username for an account id, treating a dangling reference
/// as an integrity fault.
async fn username_of(state: &AppState, id: AccountId) -> Result<String, ApiError> {
    let account = state
        .accounts
        .get(id)
        .await
        .map_err(ApplicationError::from)?
        .ok_or_else(|| {
            ApplicationError::from(RepositoryError::not_found("Account", id))
        })?;
    Ok(account.username().to_string())
}

async fn lot_response(state: &AppState, lot: &Lot) -> Result<LotResponse, ApiError> {
    let pet = state
        .pets
        .get(lot.pet_id())
        .await
        .map_err(ApplicationError::from)?
        .ok_or_else(|| {
            ApplicationError::from(RepositoryError::not_found("Pet", lot.pet_id()))
        })?;
    let author = username_of(state, lot.author()).await?;
    Ok(LotResponse::new(lot, &pet, &author))
}

async fn bid_detail_response(state: &AppState, bid: &Bid) -> Result<BidDetailResponse, ApiError> {
    let lot = state
        .lots
        .get(bid.lot_id())
        .await
        .map_err(ApplicationError::from)?
        .ok_or_else(|| {
            ApplicationError::from(RepositoryError::not_found("Lot", bid.lot_id()))
        })?;
    let lot = lot_response(state, &lot).await?;
    let author = username_of(state, bid.author()).await?;
    Ok(BidDetailResponse::new(bid, &author, lot))
}

// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the service is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Account Handlers
// ============================================================================

/// Registers a new account with the configured starting balance.
#[instrument(skip(state, body))]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state
        .register_account
        .execute(register_account::RegisterAccountRequest::new(body.username))
        .await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

// ============================================================================
// Pet Handlers
// ============================================================================

/// Lists the caller's pets.
#[instrument(skip(state))]
pub async fn list_pets(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<PetResponse>>, ApiError> {
    let account = require_account(&state, caller).await?;
    let pets = state
        .pets
        .find_by_owner(account.id())
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(pets.iter().map(PetResponse::from).collect()))
}

/// Creates a pet owned by the caller.
#[instrument(skip(state, body))]
pub async fn create_pet(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Json(body): Json<PetCreateRequest>,
) -> Result<(StatusCode, Json<PetResponse>), ApiError> {
    let pet = state
        .create_pet
        .execute(create_pet::CreatePetRequest::new(
            caller.0, body.name, body.breed,
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(PetResponse::from(&pet))))
}

// ============================================================================
// Lot Handlers
// ============================================================================

/// Lists all open lots.
#[instrument(skip(state))]
pub async fn list_lots(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<LotResponse>>, ApiError> {
    require_account(&state, caller).await?;
    let lots = state
        .lots
        .find_open()
        .await
        .map_err(ApplicationError::from)?;
    let mut responses = Vec::with_capacity(lots.len());
    for lot in &lots {
        responses.push(lot_response(&state, lot).await?);
    }
    Ok(Json(responses))
}

/// Offers one of the caller's pets for auction.
#[instrument(skip(state, body))]
pub async fn create_lot(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Json(body): Json<LotCreateRequest>,
) -> Result<(StatusCode, Json<LotResponse>), ApiError> {
    require_account(&state, caller).await?;
    let lot = state
        .create_lot
        .execute(create_lot::CreateLotRequest::new(
            body.pet_id.into(),
            caller.0,
            body.price,
        ))
        .await?;
    let response = lot_response(&state, &lot).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists the active bids on a lot.
///
/// Bids on a closed lot are inert and excluded from the active view,
/// although their records persist.
#[instrument(skip(state))]
pub async fn list_lot_bids(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<BidResponse>>, ApiError> {
    require_account(&state, caller).await?;
    let lot_id = LotId::from(id);
    let lot = state
        .lots
        .get(lot_id)
        .await
        .map_err(ApplicationError::from)?
        .ok_or(ApplicationError::LotNotFound(lot_id))?;

    if lot.is_closed() {
        return Ok(Json(Vec::new()));
    }

    let bids = state
        .bids
        .find_by_lot(lot.id())
        .await
        .map_err(ApplicationError::from)?;
    let mut responses = Vec::with_capacity(bids.len());
    for bid in &bids {
        let author = username_of(&state, bid.author()).await?;
        responses.push(BidResponse::new(bid, &author));
    }
    Ok(Json(responses))
}

/// Closes one of the caller's lots.
#[instrument(skip(state))]
pub async fn close_lot(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<LotResponse>, ApiError> {
    require_account(&state, caller).await?;
    let lot = state
        .close_lot
        .execute(close_lot::CloseLotRequest::new(id.into(), caller.0))
        .await?;
    let response = lot_response(&state, &lot).await?;
    Ok(Json(response))
}

// ============================================================================
// Bid Handlers
// ============================================================================

/// Lists all bids on currently open lots.
#[instrument(skip(state))]
pub async fn list_bids(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<BidDetailResponse>>, ApiError> {
    require_account(&state, caller).await?;
    let bids = state
        .bids
        .find_active()
        .await
        .map_err(ApplicationError::from)?;
    let mut responses = Vec::with_capacity(bids.len());
    for bid in &bids {
        responses.push(bid_detail_response(&state, bid).await?);
    }
    Ok(Json(responses))
}

/// Places a bid on an open lot.
#[instrument(skip(state, body))]
pub async fn place_bid(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Json(body): Json<BidCreateRequest>,
) -> Result<(StatusCode, Json<BidDetailResponse>), ApiError> {
    require_account(&state, caller).await?;
    let bid = state
        .place_bid
        .execute(place_bid::PlaceBidRequest::new(
            body.lot_id.into(),
            caller.0,
            body.price,
        ))
        .await?;
    let response = bid_detail_response(&state, &bid).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Withdraws one of the caller's bids.
#[instrument(skip(state))]
pub async fn withdraw_bid(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<BidResponse>, ApiError> {
    require_account(&state, caller).await?;
    let bid = state
        .withdraw_bid
        .execute(withdraw_bid::WithdrawBidRequest::new(id.into(), caller.0))
        .await?;
    let author = username_of(&state, bid.author()).await?;
    Ok(Json(BidResponse::new(&bid, &author)))
}

/// Accepts a bid on one of the caller's lots and settles it atomically.
#[instrument(skip(state))]
pub async fn accept_bid(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<SettlementResponse>, ApiError> {
    require_account(&state, caller).await?;
    let settlement = state
        .accept_bid
        .execute(accept_bid::AcceptBidRequest::new(id.into(), caller.0))
        .await?;
    Ok(Json(SettlementResponse::from(&settlement)))
}
