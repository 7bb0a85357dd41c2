//! Core data models for duit
//!
//! This module contains the data structures that represent the ledger
//! domain: monetary amounts, transactions, and the persisted ledger itself.

pub mod money;
pub mod transaction;

pub use money::Money;
pub use transaction::{Ledger, Transaction, TransactionKind};
