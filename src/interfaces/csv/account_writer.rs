use crate::domain::account::{Account, Balance};
use crate::error::Result;
use std::io::Write;

/// Writes account records as CSV with the same columns `AccountReader` reads.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes all accounts and flushes. Balances are printed without trailing zeros.
    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) -> Result<()> {
        for mut account in accounts {
            account.balance = Balance::new(account.balance.value().normalize());
            self.writer.serialize(account)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
