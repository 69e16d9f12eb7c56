use clap::Parser;
use miette::{IntoDiagnostic, Result};
use schemepay::application::account_service::{AccountService, DataStoreFactory};
use schemepay::application::payment_service::PaymentService;
use schemepay::config::{ConfigurationProvider, EnvConfiguration, StaticConfiguration};
use schemepay::domain::ports::{AccountStore, SharedAccountStore};
use schemepay::infrastructure::in_memory::InMemoryAccountStore;
use schemepay::interfaces::csv::account_reader::AccountReader;
use schemepay::interfaces::csv::account_writer::AccountWriter;
use schemepay::interfaces::csv::payment_reader::PaymentReader;
use schemepay::interfaces::csv::result_writer::ResultWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Accounts CSV loaded into the primary store
    accounts: PathBuf,

    /// Payment requests CSV
    payments: PathBuf,

    /// Accounts CSV loaded into the backup store
    #[arg(long)]
    backup_accounts: Option<PathBuf>,

    /// Data store selector. "Backup" selects the backup store. When omitted,
    /// DATA_STORE_TYPE is read from the environment on every lookup.
    #[arg(long)]
    data_store: Option<String>,

    /// Path to persistent database (optional). If provided, uses RocksDB as the primary store.
    /// Accounts already in the database keep their stored state; only new
    /// account numbers from the accounts CSV are added.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Write the final state of both stores to this CSV file
    #[arg(long)]
    accounts_out: Option<PathBuf>,
}

#[cfg(feature = "storage-rocksdb")]
fn primary_store(db_path: Option<PathBuf>) -> Result<SharedAccountStore> {
    use schemepay::infrastructure::rocksdb::RocksDBStore;

    match db_path {
        Some(path) => Ok(Arc::new(RocksDBStore::open(path).into_diagnostic()?)),
        None => Ok(Arc::new(InMemoryAccountStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn primary_store(db_path: Option<PathBuf>) -> Result<SharedAccountStore> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Arc::new(InMemoryAccountStore::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let primary = primary_store(cli.db_path)?;
    let backup: SharedAccountStore = Arc::new(InMemoryAccountStore::new());

    let file = File::open(&cli.accounts).into_diagnostic()?;
    AccountReader::new(file)
        .seed_into(primary.as_ref())
        .await
        .into_diagnostic()?;

    if let Some(path) = &cli.backup_accounts {
        let file = File::open(path).into_diagnostic()?;
        AccountReader::new(file)
            .load_into(backup.as_ref())
            .await
            .into_diagnostic()?;
    }

    let configuration: Box<dyn ConfigurationProvider> = match cli.data_store {
        Some(value) => Box::new(StaticConfiguration::new(value)),
        None => Box::new(EnvConfiguration),
    };
    let factory = DataStoreFactory::new(primary.clone(), backup.clone());
    let service = PaymentService::new(AccountService::new(factory, configuration));

    // Process payments, one result row per readable request
    let stdout = io::stdout();
    let mut results = ResultWriter::new(stdout.lock());
    let file = File::open(&cli.payments).into_diagnostic()?;
    for request in PaymentReader::new(file).requests() {
        match request {
            Ok(request) => match service.make_payment(&request).await {
                Ok(result) => results.write_result(&request, &result).into_diagnostic()?,
                Err(e) => tracing::error!(
                    error = %e,
                    debtor = %request.debtor_account_number,
                    "payment could not be processed"
                ),
            },
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable payment record");
            }
        }
    }
    results.flush().into_diagnostic()?;

    if let Some(path) = cli.accounts_out {
        let mut accounts = primary.all_accounts().await.into_diagnostic()?;
        accounts.extend(backup.all_accounts().await.into_diagnostic()?);

        let file = File::create(path).into_diagnostic()?;
        AccountWriter::new(file)
            .write_accounts(accounts)
            .into_diagnostic()?;
    }

    Ok(())
}
