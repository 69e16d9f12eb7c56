use crate::domain::payment::{PaymentRequest, PaymentResult, PaymentScheme, RejectionReason};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    debtor: &'a str,
    creditor: &'a str,
    scheme: PaymentScheme,
    amount: Decimal,
    success: bool,
    reason: Option<RejectionReason>,
}

/// Streams one CSV row per processed payment request.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, request: &PaymentRequest, result: &PaymentResult) -> Result<()> {
        self.writer.serialize(ResultRecord {
            debtor: &request.debtor_account_number,
            creditor: &request.creditor_account_number,
            scheme: request.scheme,
            amount: request.amount.normalize(),
            success: result.success,
            reason: result.reason,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
