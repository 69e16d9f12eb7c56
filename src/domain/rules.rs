//! Per-scheme eligibility rules.
//!
//! Each rule is a pure function of an account snapshot and a requested amount.
//! A missing account is always a rejection, never a fault.

use crate::domain::account::Account;
use crate::domain::payment::{PaymentResult, PaymentScheme, RejectionReason};
use rust_decimal::Decimal;

/// Decides whether an account may be debited `amount` through one scheme.
pub trait SchemeRule: Send + Sync {
    fn evaluate(&self, account: Option<&Account>, amount: Decimal) -> PaymentResult;
}

/// Checks shared by every rule: the account exists and has the scheme enabled.
fn admit(account: Option<&Account>, scheme: PaymentScheme) -> Result<&Account, PaymentResult> {
    let account =
        account.ok_or_else(|| PaymentResult::rejected(RejectionReason::AccountNotFound))?;
    if !account.allowed_schemes.contains(scheme) {
        return Err(PaymentResult::rejected(RejectionReason::SchemeNotAllowed));
    }
    Ok(account)
}

/// Bacs only requires the scheme to be enabled on the account.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacsRule;

impl SchemeRule for BacsRule {
    fn evaluate(&self, account: Option<&Account>, _amount: Decimal) -> PaymentResult {
        match admit(account, PaymentScheme::Bacs) {
            Ok(_) => PaymentResult::approved(),
            Err(rejection) => rejection,
        }
    }
}

/// Faster Payments needs a non-zero amount strictly below the balance.
#[derive(Debug, Default, Clone, Copy)]
pub struct FasterPaymentsRule;

impl SchemeRule for FasterPaymentsRule {
    fn evaluate(&self, account: Option<&Account>, amount: Decimal) -> PaymentResult {
        let account = match admit(account, PaymentScheme::FasterPayments) {
            Ok(account) => account,
            Err(rejection) => return rejection,
        };

        if amount.is_zero() {
            return PaymentResult::rejected(RejectionReason::InvalidAmount);
        }
        // Strict: a balance equal to the amount is not enough.
        if account.balance.value() <= amount {
            return PaymentResult::rejected(RejectionReason::InsufficientFunds);
        }
        PaymentResult::approved()
    }
}

/// Chaps needs the account to be live. Funds are not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChapsRule;

impl SchemeRule for ChapsRule {
    fn evaluate(&self, account: Option<&Account>, _amount: Decimal) -> PaymentResult {
        match admit(account, PaymentScheme::Chaps) {
            Ok(account) if account.is_live() => PaymentResult::approved(),
            Ok(_) => PaymentResult::rejected(RejectionReason::AccountNotLive),
            Err(rejection) => rejection,
        }
    }
}
