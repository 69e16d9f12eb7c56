use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A backing store for debtor accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Looks an account up by number. `Ok(None)` means no such account.
    async fn get(&self, number: &str) -> Result<Option<Account>>;
    /// Writes the account back, inserting it if it is not present yet.
    async fn update(&self, account: Account) -> Result<()>;
    async fn all_accounts(&self) -> Result<Vec<Account>>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type SharedAccountStore = Arc<dyn AccountStore>;
