//! Terminal output formatting

pub mod summary;
pub mod transaction;

pub use summary::format_monthly_summary;
pub use transaction::format_transaction_register;
