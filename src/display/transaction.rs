//! Transaction display formatting
//!
//! Formats transactions for terminal display as a register, one row per
//! transaction in ledger order.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(index: usize, tx: &Transaction) -> String {
    let date_display = tx
        .effective_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "(no date)".to_string());

    let label = if tx.category.is_empty() {
        "-".to_string()
    } else {
        truncate(&tx.category, 16)
    };

    let mut row = format!(
        "{:>3}. {:10} {:7} {:>18} {:16}",
        index, date_display, tx.kind, tx.amount, label
    );
    if !tx.note.is_empty() {
        row.push(' ');
        row.push_str(&tx.note);
    }
    row
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:10} {:7} {:>18} {:16} {}\n",
        "#", "Date", "Kind", "Amount", "Category", "Note"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for (i, tx) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, tx));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
