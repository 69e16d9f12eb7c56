use crate::domain::account::{Account, Balance};
use rust_decimal::Decimal;

/// Applies an approved payment to an account balance.
pub trait BalanceAdjuster: Send + Sync {
    /// Subtracts `amount` from the balance in place. Eligibility must already
    /// have been checked, the balance is allowed to go negative.
    fn debit(&self, account: &mut Account, amount: Decimal);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BalanceCalculator;

impl BalanceAdjuster for BalanceCalculator {
    fn debit(&self, account: &mut Account, amount: Decimal) {
        account.balance -= Balance::new(amount);
    }
}
