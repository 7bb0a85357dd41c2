//! Monthly reporting over a ledger snapshot

pub mod monthly;

pub use monthly::{summarize, transactions_for_month, MonthlySummary};
