//! Monthly aggregation
//!
//! Pure functions over a ledger snapshot: filter transactions into a
//! (year, month) bucket by effective date and compute totals. Sums are exact
//! i64 minor-unit arithmetic; rounding is display's problem.

use chrono::Datelike;

use crate::models::{Ledger, Money, Transaction, TransactionKind};

/// Aggregate for one (year, month) bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Sum of income amounts in the month
    pub income_total: Money,
    /// Sum of expense amounts in the month
    pub expense_total: Money,
    /// `income_total - expense_total`; may be negative
    pub balance: Money,
    /// Number of transactions in the month
    pub count: usize,
}

/// Select every transaction whose effective date falls in (year, month)
///
/// Transactions with no resolvable date are excluded. Result order is the
/// ledger's insertion order.
pub fn transactions_for_month(ledger: &Ledger, year: i32, month: u32) -> Vec<&Transaction> {
    ledger
        .transactions()
        .iter()
        .filter(|tx| {
            tx.effective_date()
                .map(|d| d.year() == year && d.month() == month)
                .unwrap_or(false)
        })
        .collect()
}

/// Compute the monthly summary for (year, month)
pub fn summarize(ledger: &Ledger, year: i32, month: u32) -> MonthlySummary {
    let txs = transactions_for_month(ledger, year, month);

    let income_total: Money = txs
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Income)
        .map(|tx| tx.amount)
        .sum();
    let expense_total: Money = txs
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
        .map(|tx| tx.amount)
        .sum();

    MonthlySummary {
        income_total,
        expense_total,
        balance: income_total - expense_total,
        count: txs.len(),
    }
}
