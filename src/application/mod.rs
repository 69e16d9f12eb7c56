//! Application layer containing the payment orchestration.
//!
//! `PaymentService` is the entry point callers use. It pulls the debtor account
//! through `AccountService`, asks `PaymentsValidator` for the scheme verdict and
//! applies approved payments with a `BalanceAdjuster`.

pub mod account_service;
pub mod calculator;
pub mod payment_service;
pub mod validator;
