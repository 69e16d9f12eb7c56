//! Domain types: accounts, payment requests and results, the per-scheme
//! eligibility rules and the storage port the application layer talks to.

pub mod account;
pub mod payment;
pub mod ports;
pub mod rules;
