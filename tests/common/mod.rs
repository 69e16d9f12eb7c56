#![allow(dead_code)]

use async_trait::async_trait;
use schemepay::application::account_service::{AccountService, DataStoreFactory};
use schemepay::application::payment_service::PaymentService;
use schemepay::config::StaticConfiguration;
use schemepay::domain::account::Account;
use schemepay::domain::ports::AccountStore;
use schemepay::error::Result;
use schemepay::infrastructure::in_memory::InMemoryAccountStore;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// An in-memory store that counts lookups and updates.
#[derive(Default, Clone)]
pub struct RecordingStore {
    inner: InMemoryAccountStore,
    gets: Arc<AtomicUsize>,
    updates: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            inner: InMemoryAccountStore::with_accounts(accounts),
            ..Default::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountStore for RecordingStore {
    async fn get(&self, number: &str) -> Result<Option<Account>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(number).await
    }

    async fn update(&self, account: Account) -> Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(account).await
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.all_accounts().await
    }
}

/// A payment service over `store` as primary and an empty backup.
pub fn service_over(store: &RecordingStore) -> PaymentService {
    let factory = DataStoreFactory::new(
        Arc::new(store.clone()),
        Arc::new(InMemoryAccountStore::new()),
    );
    PaymentService::new(AccountService::new(
        factory,
        Box::new(StaticConfiguration::default()),
    ))
}

pub fn csv_file(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

pub fn accounts_csv(rows: &[&str]) -> NamedTempFile {
    csv_file("number, balance, allowed_schemes, status", rows)
}

pub fn payments_csv(rows: &[&str]) -> NamedTempFile {
    csv_file("debtor, creditor, amount, scheme, date", rows)
}
