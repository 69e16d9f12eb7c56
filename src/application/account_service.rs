use crate::config::{ConfigurationProvider, DataStoreKind};
use crate::domain::account::Account;
use crate::domain::ports::{AccountStore, SharedAccountStore};
use crate::error::Result;

/// Hands out the primary or backup account store.
#[derive(Clone)]
pub struct DataStoreFactory {
    primary: SharedAccountStore,
    backup: SharedAccountStore,
}

impl DataStoreFactory {
    pub fn new(primary: SharedAccountStore, backup: SharedAccountStore) -> Self {
        Self { primary, backup }
    }

    pub fn get_data_store(&self, kind: DataStoreKind) -> &dyn AccountStore {
        match kind {
            DataStoreKind::Primary => self.primary.as_ref(),
            DataStoreKind::Backup => self.backup.as_ref(),
        }
    }
}

/// Account lookup and persistence on behalf of the payment service.
///
/// The configured selector is read again on every call, so each lookup and
/// update goes to whichever store is selected at that moment.
pub struct AccountService {
    factory: DataStoreFactory,
    configuration: Box<dyn ConfigurationProvider>,
}

impl AccountService {
    pub fn new(factory: DataStoreFactory, configuration: Box<dyn ConfigurationProvider>) -> Self {
        Self {
            factory,
            configuration,
        }
    }

    fn data_store(&self) -> &dyn AccountStore {
        let kind = DataStoreKind::from_setting(&self.configuration.data_store_type());
        tracing::debug!(?kind, "resolved account store");
        self.factory.get_data_store(kind)
    }

    pub async fn get_account(&self, number: &str) -> Result<Option<Account>> {
        self.data_store().get(number).await
    }

    pub async fn update_account(&self, account: Account) -> Result<()> {
        self.data_store().update(account).await
    }
}
