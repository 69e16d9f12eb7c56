use crate::application::account_service::AccountService;
use crate::application::calculator::{BalanceAdjuster, BalanceCalculator};
use crate::application::validator::PaymentsValidator;
use crate::domain::payment::{PaymentRequest, PaymentResult, RejectionReason};
use crate::error::Result;

/// The entry point for authorizing and executing payments.
///
/// Each call looks the debtor account up, runs the scheme rule against it and,
/// only when the rule approves, debits the balance and writes the account
/// back. The storage calls are awaited strictly in that order.
///
/// There is no locking around the account: two concurrent payments against
/// the same account both read the same snapshot and the last write wins.
pub struct PaymentService {
    validator: PaymentsValidator,
    accounts: AccountService,
    adjuster: Box<dyn BalanceAdjuster>,
}

impl PaymentService {
    /// Creates a service with the standard scheme rules and balance calculator.
    pub fn new(accounts: AccountService) -> Self {
        Self::with_parts(PaymentsValidator::new(), accounts, Box::new(BalanceCalculator))
    }

    pub fn with_parts(
        validator: PaymentsValidator,
        accounts: AccountService,
        adjuster: Box<dyn BalanceAdjuster>,
    ) -> Self {
        Self {
            validator,
            accounts,
            adjuster,
        }
    }

    /// Authorizes `request` and, if approved, applies it.
    ///
    /// Rejections come back as `Ok` with `success == false`; a missing debtor
    /// account is one of them. `Err` is only returned when the account store
    /// itself fails. If the write-back fails the debit is lost.
    pub async fn make_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let account = self
            .accounts
            .get_account(&request.debtor_account_number)
            .await?;

        let result = self
            .validator
            .validate(request.scheme, account.as_ref(), request.amount);

        if !result.success {
            tracing::warn!(
                debtor = %request.debtor_account_number,
                scheme = %request.scheme,
                amount = %request.amount,
                reason = ?result.reason,
                "payment rejected"
            );
            return Ok(result);
        }
        // A custom rule may approve a missing account; nothing can be debited then.
        let Some(mut account) = account else {
            tracing::warn!(
                debtor = %request.debtor_account_number,
                "rule approved a payment for a missing account"
            );
            return Ok(PaymentResult::rejected(RejectionReason::AccountNotFound));
        };

        self.adjuster.debit(&mut account, request.amount);
        self.accounts.update_account(account).await?;

        tracing::info!(
            debtor = %request.debtor_account_number,
            creditor = %request.creditor_account_number,
            scheme = %request.scheme,
            amount = %request.amount,
            "payment applied"
        );
        Ok(result)
    }
}
