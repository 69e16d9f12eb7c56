//! Selection of the account store that serves a request.

use std::env;

/// Name of the environment variable read by [`EnvConfiguration`].
pub const DATA_STORE_TYPE_VAR: &str = "DATA_STORE_TYPE";

const BACKUP: &str = "Backup";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataStoreKind {
    Primary,
    Backup,
}

impl DataStoreKind {
    /// Only the exact value `Backup` selects the backup store.
    pub fn from_setting(value: &str) -> Self {
        if value == BACKUP {
            DataStoreKind::Backup
        } else {
            DataStoreKind::Primary
        }
    }
}

/// Source of the data store selector. Implementations are queried on every
/// account lookup and update, so a change takes effect on the next call.
pub trait ConfigurationProvider: Send + Sync {
    fn data_store_type(&self) -> String;
}

/// A fixed selector value.
#[derive(Debug, Clone, Default)]
pub struct StaticConfiguration(pub String);

impl StaticConfiguration {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl ConfigurationProvider for StaticConfiguration {
    fn data_store_type(&self) -> String {
        self.0.clone()
    }
}

/// Reads `DATA_STORE_TYPE` from the process environment on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfiguration;

impl ConfigurationProvider for EnvConfiguration {
    fn data_store_type(&self) -> String {
        env::var(DATA_STORE_TYPE_VAR).unwrap_or_default()
    }
}
