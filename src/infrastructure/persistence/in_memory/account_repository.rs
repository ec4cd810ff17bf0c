//! In-memory [`AccountRepository`] implementation.

use crate::domain::entities::Account;
use crate::domain::value_objects::AccountId;
use crate::infrastructure::persistence::in_memory::InMemoryStore;
use crate::infrastructure::persistence::traits::{
    AccountRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn insert(&self, account: &Account) -> RepositoryResult<()> {
        let mut tables = self.tables().write().await;
        if tables.accounts.contains_key(&account.id()) {
            return Err(RepositoryError::already_exists("Account", account.id()));
        }
        if tables
            .accounts
            .values()
            .any(|existing| existing.username() == account.username())
        {
            return Err(RepositoryError::already_exists(
                "Account",
                account.username(),
            ));
        }
        tables.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn get(&self, id: AccountId) -> RepositoryResult<Option<Account>> {
        let tables = self.tables().read().await;
        Ok(tables.accounts.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Account>> {
        let tables = self.tables().read().await;
        Ok(tables
            .accounts
            .values()
            .find(|account| account.username() == username)
            .cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Money;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn insert_and_get() {
        let store = InMemoryStore::new();
        let account = Account::new("alice", money("100.00"));

        AccountRepository::insert(&store, &account).await.unwrap();

        let found = AccountRepository::get(&store, account.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, account);
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let store = InMemoryStore::new();
        let found = AccountRepository::get(&store, AccountId::new_v4())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = InMemoryStore::new();
        AccountRepository::insert(&store, &Account::new("alice", money("100.00")))
            .await
            .unwrap();

        let err = AccountRepository::insert(&store, &Account::new("alice", money("100.00")))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn find_by_username() {
        let store = InMemoryStore::new();
        let account = Account::new("bob", money("100.00"));
        AccountRepository::insert(&store, &account).await.unwrap();

        let found = store.find_by_username("bob").await.unwrap().unwrap();
        assert_eq!(found.id(), account.id());
        assert!(store.find_by_username("carol").await.unwrap().is_none());
    }
}
