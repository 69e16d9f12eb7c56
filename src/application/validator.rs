use crate::domain::account::Account;
use crate::domain::payment::{PaymentResult, PaymentScheme};
use crate::domain::rules::{BacsRule, ChapsRule, FasterPaymentsRule, SchemeRule};
use rust_decimal::Decimal;

/// Routes a payment to the eligibility rule of its scheme.
///
/// Holds exactly one rule per scheme, so every scheme is always covered.
/// Alternate rules can be supplied with [`PaymentsValidator::with_rules`].
pub struct PaymentsValidator {
    bacs: Box<dyn SchemeRule>,
    faster_payments: Box<dyn SchemeRule>,
    chaps: Box<dyn SchemeRule>,
}

impl Default for PaymentsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentsValidator {
    pub fn new() -> Self {
        Self::with_rules(
            Box::new(BacsRule),
            Box::new(FasterPaymentsRule),
            Box::new(ChapsRule),
        )
    }

    pub fn with_rules(
        bacs: Box<dyn SchemeRule>,
        faster_payments: Box<dyn SchemeRule>,
        chaps: Box<dyn SchemeRule>,
    ) -> Self {
        Self {
            bacs,
            faster_payments,
            chaps,
        }
    }

    pub fn rule_for(&self, scheme: PaymentScheme) -> &dyn SchemeRule {
        match scheme {
            PaymentScheme::Bacs => self.bacs.as_ref(),
            PaymentScheme::FasterPayments => self.faster_payments.as_ref(),
            PaymentScheme::Chaps => self.chaps.as_ref(),
        }
    }

    /// Evaluates the rule registered for `scheme`. Never mutates the account.
    pub fn validate(
        &self,
        scheme: PaymentScheme,
        account: Option<&Account>,
        amount: Decimal,
    ) -> PaymentResult {
        let result = self.rule_for(scheme).evaluate(account, amount);
        tracing::debug!(%scheme, %amount, success = result.success, "scheme rule evaluated");
        result
    }
}
