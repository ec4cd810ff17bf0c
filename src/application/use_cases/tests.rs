//! Scenario tests for the use cases, run against the in-memory store.

#![allow(clippy::unwrap_used)]

use crate::application::error::ApplicationError;
use crate::application::services::AccountLedger;
use crate::application::use_cases::{
    AcceptBidRequest, AcceptBidUseCase, CloseLotRequest, CloseLotUseCase, CreateLotRequest,
    CreateLotUseCase, CreatePetRequest, CreatePetUseCase, PlaceBidRequest, PlaceBidUseCase,
    RegisterAccountRequest, RegisterAccountUseCase, WithdrawBidRequest, WithdrawBidUseCase,
};
use crate::domain::entities::{Account, Bid, Lot, Pet};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, Breed, Money};
use crate::infrastructure::persistence::in_memory::InMemoryStore;
use crate::infrastructure::persistence::traits::AccountRepository;
use rust_decimal::Decimal;
use std::sync::Arc;

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

/// All use cases wired over one shared in-memory store, with a 100.00
/// starting balance for new accounts.
struct Harness {
    store: InMemoryStore,
    ledger: AccountLedger,
    register: RegisterAccountUseCase,
    create_pet: CreatePetUseCase,
    create_lot: CreateLotUseCase,
    close_lot: CloseLotUseCase,
    place_bid: PlaceBidUseCase,
    withdraw_bid: WithdrawBidUseCase,
    accept_bid: AcceptBidUseCase,
}

impl Harness {
    fn new() -> Self {
        let store = InMemoryStore::new();
        let accounts: Arc<dyn AccountRepository> = Arc::new(store.clone());
        let ledger = AccountLedger::new(accounts.clone(), Arc::new(store.clone()));
        Self {
            ledger: ledger.clone(),
            register: RegisterAccountUseCase::new(accounts.clone(), money("100.00")),
            create_pet: CreatePetUseCase::new(accounts, Arc::new(store.clone())),
            create_lot: CreateLotUseCase::new(Arc::new(store.clone()), Arc::new(store.clone())),
            close_lot: CloseLotUseCase::new(Arc::new(store.clone())),
            place_bid: PlaceBidUseCase::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                ledger,
            ),
            withdraw_bid: WithdrawBidUseCase::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
            ),
            accept_bid: AcceptBidUseCase::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                Arc::new(store.clone()),
            ),
            store,
        }
    }

    async fn register(&self, username: &str) -> Account {
        self.register
            .execute(RegisterAccountRequest::new(username))
            .await
            .unwrap()
    }

    async fn pet_for(&self, owner: &Account, name: &str) -> Pet {
        self.create_pet
            .execute(CreatePetRequest::new(owner.id(), name, Breed::Cat))
            .await
            .unwrap()
    }

    /// Registers an author, creates a pet, and lists it at the given price.
    async fn listed_lot(&self, username: &str, price: &str) -> (Account, Pet, Lot) {
        let author = self.register(username).await;
        let pet = self.pet_for(&author, "Whiskers").await;
        let lot = self
            .create_lot
            .execute(CreateLotRequest::new(pet.id(), author.id(), money(price)))
            .await
            .unwrap();
        (author, pet, lot)
    }

    async fn available(&self, account_id: AccountId) -> Decimal {
        self.ledger.available_balance(account_id).await.unwrap()
    }

    async fn stored_balance(&self, account_id: AccountId) -> Money {
        AccountRepository::get(&self.store, account_id)
            .await
            .unwrap()
            .unwrap()
            .balance()
    }

    async fn bid(&self, lot: &Lot, bidder: &Account, price: &str) -> Bid {
        self.place_bid
            .execute(PlaceBidRequest::new(lot.id(), bidder.id(), money(price)))
            .await
            .unwrap()
    }
}

fn domain_err(result: Result<impl std::fmt::Debug, ApplicationError>) -> DomainError {
    match result.unwrap_err() {
        ApplicationError::Domain(err) => err,
        other => panic!("expected domain error, got {other:?}"),
    }
}

mod registration {
    use super::*;

    #[tokio::test]
    async fn new_account_gets_the_starting_balance() {
        let h = Harness::new();
        let account = h.register("alice").await;
        assert_eq!(account.balance(), money("100.00"));
        assert_eq!(h.available(account.id()).await, money("100.00").get());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let h = Harness::new();
        h.register("alice").await;
        let err = h
            .register
            .execute(RegisterAccountRequest::new("alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::UsernameTaken(_)));
    }

    #[tokio::test]
    async fn empty_username_is_rejected() {
        let h = Harness::new();
        let err = h
            .register
            .execute(RegisterAccountRequest::new("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }
}

mod lots {
    use super::*;

    #[tokio::test]
    async fn listing_someone_elses_pet_is_rejected() {
        let h = Harness::new();
        let owner = h.register("owner").await;
        let pet = h.pet_for(&owner, "Whiskers").await;
        let intruder = h.register("intruder").await;

        let err = h
            .create_lot
            .execute(CreateLotRequest::new(pet.id(), intruder.id(), money("10.00")))
            .await;
        assert_eq!(domain_err(err), DomainError::UserNotOwnPet);
    }

    #[tokio::test]
    async fn second_open_lot_for_the_same_pet_is_rejected() {
        let h = Harness::new();
        let (author, pet, _lot) = h.listed_lot("author", "10.00").await;

        let err = h
            .create_lot
            .execute(CreateLotRequest::new(pet.id(), author.id(), money("20.00")))
            .await;
        assert_eq!(domain_err(err), DomainError::LotExists);
    }

    #[tokio::test]
    async fn closing_a_lot_allows_relisting() {
        let h = Harness::new();
        let (author, pet, lot) = h.listed_lot("author", "10.00").await;

        h.close_lot
            .execute(CloseLotRequest::new(lot.id(), author.id()))
            .await
            .unwrap();

        h.create_lot
            .execute(CreateLotRequest::new(pet.id(), author.id(), money("20.00")))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn only_the_author_may_close() {
        let h = Harness::new();
        let (_author, _pet, lot) = h.listed_lot("author", "10.00").await;
        let other = h.register("other").await;

        let err = h
            .close_lot
            .execute(CloseLotRequest::new(lot.id(), other.id()))
            .await;
        assert_eq!(domain_err(err), DomainError::UserIsNotAuthorForLot);
    }

    #[tokio::test]
    async fn closing_twice_is_rejected() {
        let h = Harness::new();
        let (author, _pet, lot) = h.listed_lot("author", "10.00").await;

        h.close_lot
            .execute(CloseLotRequest::new(lot.id(), author.id()))
            .await
            .unwrap();
        let err = h
            .close_lot
            .execute(CloseLotRequest::new(lot.id(), author.id()))
            .await;
        assert_eq!(domain_err(err), DomainError::LotAlreadyClosed);
    }
}

mod bidding {
    use super::*;

    #[tokio::test]
    async fn a_bid_reduces_available_balance_and_repeats_are_rejected() {
        let h = Harness::new();
        let (_author, _pet, lot) = h.listed_lot("author", "10.00").await;
        let bidder = h.register("bidder").await;

        h.bid(&lot, &bidder, "30.00").await;
        assert_eq!(h.available(bidder.id()).await, money("70.00").get());
        // The stored balance is untouched; the reduction is derived.
        assert_eq!(h.stored_balance(bidder.id()).await, money("100.00"));

        let err = h
            .place_bid
            .execute(PlaceBidRequest::new(lot.id(), bidder.id(), money("40.00")))
            .await;
        assert_eq!(domain_err(err), DomainError::OnlyOneBidAllowed);
    }

    #[tokio::test]
    async fn exposure_across_lots_blocks_overcommitment() {
        let h = Harness::new();
        let (_a1, _p1, lot_1) = h.listed_lot("author-1", "10.00").await;
        let (_a2, _p2, lot_2) = h.listed_lot("author-2", "10.00").await;
        let (_a3, _p3, lot_3) = h.listed_lot("author-3", "10.00").await;
        let bidder = h.register("bidder").await;

        h.bid(&lot_1, &bidder, "50.00").await;
        h.bid(&lot_2, &bidder, "50.00").await;
        assert_eq!(h.available(bidder.id()).await, Decimal::ZERO);

        let err = h
            .place_bid
            .execute(PlaceBidRequest::new(lot_3.id(), bidder.id(), money("10.00")))
            .await;
        assert_eq!(domain_err(err), DomainError::InsufficientBalance);
    }

    #[tokio::test]
    async fn bidding_on_your_own_lot_is_rejected() {
        let h = Harness::new();
        let (author, _pet, lot) = h.listed_lot("author", "10.00").await;

        let err = h
            .place_bid
            .execute(PlaceBidRequest::new(lot.id(), author.id(), money("10.00")))
            .await;
        assert_eq!(domain_err(err), DomainError::CannotBidInOwnLot);

        // No bid row was created for the rejected operation.
        let bids = crate::infrastructure::persistence::traits::BidRepository::find_by_lot(
            &h.store,
            lot.id(),
        )
        .await
        .unwrap();
        assert!(bids.is_empty());
    }

    #[tokio::test]
    async fn bidding_on_a_closed_lot_is_rejected() {
        let h = Harness::new();
        let (author, _pet, lot) = h.listed_lot("author", "10.00").await;
        h.close_lot
            .execute(CloseLotRequest::new(lot.id(), author.id()))
            .await
            .unwrap();
        let bidder = h.register("bidder").await;

        let err = h
            .place_bid
            .execute(PlaceBidRequest::new(lot.id(), bidder.id(), money("10.00")))
            .await;
        assert_eq!(domain_err(err), DomainError::LotAlreadyClosed);
    }

    #[tokio::test]
    async fn withdrawal_restores_available_balance() {
        let h = Harness::new();
        let (_author, _pet, lot) = h.listed_lot("author", "10.00").await;
        let bidder = h.register("bidder").await;

        let bid = h.bid(&lot, &bidder, "30.00").await;
        assert_eq!(h.available(bidder.id()).await, money("70.00").get());

        h.withdraw_bid
            .execute(WithdrawBidRequest::new(bid.id(), bidder.id()))
            .await
            .unwrap();
        assert_eq!(h.available(bidder.id()).await, money("100.00").get());
    }

    #[tokio::test]
    async fn withdrawing_someone_elses_bid_is_rejected() {
        let h = Harness::new();
        let (_author, _pet, lot) = h.listed_lot("author", "10.00").await;
        let bidder = h.register("bidder").await;
        let other = h.register("other").await;

        let bid = h.bid(&lot, &bidder, "30.00").await;
        let err = h
            .withdraw_bid
            .execute(WithdrawBidRequest::new(bid.id(), other.id()))
            .await;
        assert_eq!(domain_err(err), DomainError::UserIsNotAuthorForBid);
    }

    #[tokio::test]
    async fn withdrawing_from_a_closed_lot_is_rejected() {
        let h = Harness::new();
        let (author, _pet, lot) = h.listed_lot("author", "10.00").await;
        let bidder = h.register("bidder").await;

        let bid = h.bid(&lot, &bidder, "30.00").await;
        h.close_lot
            .execute(CloseLotRequest::new(lot.id(), author.id()))
            .await
            .unwrap();

        let err = h
            .withdraw_bid
            .execute(WithdrawBidRequest::new(bid.id(), bidder.id()))
            .await;
        assert_eq!(domain_err(err), DomainError::LotAlreadyClosed);
    }
}

mod settlement {
    use super::*;
    use crate::infrastructure::persistence::traits::{LotRepository, PetRepository};

    #[tokio::test]
    async fn acceptance_settles_ownership_balances_and_lot_state() {
        let h = Harness::new();
        let (seller, pet, lot) = h.listed_lot("seller", "10.00").await;
        let buyer = h.register("buyer").await;
        let bid = h.bid(&lot, &buyer, "30.00").await;

        let settlement = h
            .accept_bid
            .execute(AcceptBidRequest::new(bid.id(), seller.id()))
            .await
            .unwrap();

        assert_eq!(settlement.seller.balance(), money("130.00"));
        assert_eq!(settlement.buyer.balance(), money("70.00"));
        assert_eq!(settlement.pet.owner(), buyer.id());
        assert!(settlement.lot.is_closed());

        // Committed state matches the snapshots.
        assert_eq!(h.stored_balance(seller.id()).await, money("130.00"));
        assert_eq!(h.stored_balance(buyer.id()).await, money("70.00"));
        let stored_pet = PetRepository::get(&h.store, pet.id()).await.unwrap().unwrap();
        assert_eq!(stored_pet.owner(), buyer.id());

        // The buyer's exposure on this lot is gone along with the lot.
        assert_eq!(h.available(buyer.id()).await, money("70.00").get());
    }

    #[tokio::test]
    async fn only_the_lot_author_may_accept() {
        let h = Harness::new();
        let (_seller, _pet, lot) = h.listed_lot("seller", "10.00").await;
        let buyer = h.register("buyer").await;
        let other = h.register("other").await;
        let bid = h.bid(&lot, &buyer, "30.00").await;

        let err = h
            .accept_bid
            .execute(AcceptBidRequest::new(bid.id(), other.id()))
            .await;
        assert_eq!(domain_err(err), DomainError::CanOnlyAcceptBidForOwnLot);
    }

    #[tokio::test]
    async fn remaining_bids_become_inert_after_acceptance() {
        let h = Harness::new();
        let (seller, _pet, lot) = h.listed_lot("seller", "10.00").await;
        let buyer = h.register("buyer").await;
        let loser = h.register("loser").await;

        let winning = h.bid(&lot, &buyer, "30.00").await;
        let losing = h.bid(&lot, &loser, "20.00").await;

        h.accept_bid
            .execute(AcceptBidRequest::new(winning.id(), seller.id()))
            .await
            .unwrap();

        // The losing bid still exists but can be neither accepted nor
        // withdrawn.
        let err = h
            .accept_bid
            .execute(AcceptBidRequest::new(losing.id(), seller.id()))
            .await;
        assert_eq!(domain_err(err), DomainError::LotAlreadyClosed);

        let err = h
            .withdraw_bid
            .execute(WithdrawBidRequest::new(losing.id(), loser.id()))
            .await;
        assert_eq!(domain_err(err), DomainError::LotAlreadyClosed);

        // And the loser's funds are available again.
        assert_eq!(h.available(loser.id()).await, money("100.00").get());
    }

    #[tokio::test]
    async fn failed_settlement_commits_nothing() {
        let h = Harness::new();
        let (seller, pet, lot) = h.listed_lot("seller", "10.00").await;
        let buyer = h.register("buyer").await;
        let bid = h.bid(&lot, &buyer, "30.00").await;

        h.store.fail_next_settlement();
        let err = h
            .accept_bid
            .execute(AcceptBidRequest::new(bid.id(), seller.id()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Repository(_)));

        // Pet ownership, both balances, and the lot are all unchanged.
        let stored_pet = PetRepository::get(&h.store, pet.id()).await.unwrap().unwrap();
        assert_eq!(stored_pet.owner(), seller.id());
        assert_eq!(h.stored_balance(seller.id()).await, money("100.00"));
        assert_eq!(h.stored_balance(buyer.id()).await, money("100.00"));
        let stored_lot = LotRepository::get(&h.store, lot.id()).await.unwrap().unwrap();
        assert!(!stored_lot.is_closed());

        // The bid survives, so the acceptance can simply be retried.
        assert_eq!(h.available(buyer.id()).await, money("70.00").get());
    }
}
