use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PaymentError;

/// The payment rails an account can be debited through.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentScheme {
    Bacs,
    FasterPayments,
    Chaps,
}

impl PaymentScheme {
    pub const ALL: [PaymentScheme; 3] = [
        PaymentScheme::Bacs,
        PaymentScheme::FasterPayments,
        PaymentScheme::Chaps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentScheme::Bacs => "bacs",
            PaymentScheme::FasterPayments => "faster_payments",
            PaymentScheme::Chaps => "chaps",
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentScheme {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| PaymentError::ValidationError(format!("Unknown payment scheme: {s}")))
    }
}

/// A request to move `amount` out of the debtor account over `scheme`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    #[serde(rename = "debtor")]
    pub debtor_account_number: String,
    #[serde(rename = "creditor")]
    pub creditor_account_number: String,
    pub amount: Decimal,
    pub scheme: PaymentScheme,
    /// Carried through for the caller, no rule looks at it.
    #[serde(rename = "date")]
    pub payment_date: DateTime<Utc>,
}

impl PaymentRequest {
    pub fn new(
        debtor_account_number: impl Into<String>,
        creditor_account_number: impl Into<String>,
        amount: Decimal,
        scheme: PaymentScheme,
    ) -> Self {
        Self {
            debtor_account_number: debtor_account_number.into(),
            creditor_account_number: creditor_account_number.into(),
            amount,
            scheme,
            payment_date: Utc::now(),
        }
    }
}

/// Why a payment was turned down.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    AccountNotFound,
    SchemeNotAllowed,
    AccountNotLive,
    InvalidAmount,
    InsufficientFunds,
}

/// Outcome of an authorization.
///
/// The default value is a failure with no reason attached. `reason` is only
/// ever set on failures.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct PaymentResult {
    pub success: bool,
    pub reason: Option<RejectionReason>,
}

impl PaymentResult {
    pub fn approved() -> Self {
        Self {
            success: true,
            reason: None,
        }
    }

    pub fn rejected(reason: RejectionReason) -> Self {
        Self {
            success: false,
            reason: Some(reason),
        }
    }
}
