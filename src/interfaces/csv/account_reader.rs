use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads account records from a CSV source.
///
/// Expects the header `number, balance, allowed_schemes, status`, where
/// `allowed_schemes` is a `|` separated list such as `bacs|chaps`.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }

    /// Writes every readable record into `store`.
    ///
    /// Malformed rows are reported and skipped. Returns the number loaded.
    pub async fn load_into(self, store: &dyn AccountStore) -> Result<usize> {
        let mut loaded = 0;
        for account in self.accounts() {
            match account {
                Ok(account) => {
                    store.update(account).await?;
                    loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable account record");
                }
            }
        }
        Ok(loaded)
    }

    /// Like [`AccountReader::load_into`], but leaves accounts already held by
    /// `store` untouched so balances persisted by earlier runs survive.
    pub async fn seed_into(self, store: &dyn AccountStore) -> Result<usize> {
        let mut seeded = 0;
        for account in self.accounts() {
            match account {
                Ok(account) => {
                    if store.get(&account.number).await?.is_some() {
                        tracing::debug!(number = %account.number, "account already stored, not seeding");
                        continue;
                    }
                    store.update(account).await?;
                    seeded += 1;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable account record");
                }
            }
        }
        Ok(seeded)
    }
}
