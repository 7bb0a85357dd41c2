//! Transaction CLI commands
//!
//! Implements the add and list commands.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::{DuitError, DuitResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Store;

use super::load_with_warning;

/// Add subcommands
#[derive(Subcommand)]
pub enum AddCommands {
    /// Record money coming in
    Income {
        /// Amount (e.g. "150000" or "150000.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
        /// Effective date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Record money going out
    Expense {
        /// Amount (e.g. "50000" or "50000.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
        /// Effective date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an add command
pub fn handle_add_command(store: &Store, cmd: AddCommands) -> DuitResult<()> {
    let (kind, amount, category, note, date) = match cmd {
        AddCommands::Income {
            amount,
            category,
            note,
            date,
        } => (TransactionKind::Income, amount, category, note, date),
        AddCommands::Expense {
            amount,
            category,
            note,
            date,
        } => (TransactionKind::Expense, amount, category, note, date),
    };

    let amount = parse_amount(&amount)?;

    let mut tx = Transaction::new(kind, amount);
    if let Some(category) = category {
        tx = tx.with_category(category.trim());
    }
    if let Some(note) = note {
        tx = tx.with_note(note.trim());
    }
    if let Some(date) = date {
        tx = tx.with_date(parse_date(&date)?);
    }

    store.append(tx.clone())?;

    println!("Recorded {}: {}", kind, tx.amount);
    Ok(())
}

/// Handle the list command
pub fn handle_list_command(store: &Store) -> DuitResult<()> {
    let ledger = load_with_warning(store);
    print!("{}", format_transaction_register(ledger.transactions()));
    Ok(())
}

/// Parse a non-negative amount from user input
fn parse_amount(raw: &str) -> DuitResult<Money> {
    let amount = Money::parse(raw).map_err(|e| {
        DuitError::Validation(format!(
            "Invalid amount '{}'. Use a number like '150000' or '150000.50'. {}",
            raw, e
        ))
    })?;

    if amount.is_negative() {
        return Err(DuitError::Validation(format!(
            "Amount must not be negative (got '{}')",
            raw
        )));
    }

    Ok(amount)
}

/// Parse an effective date from user input
fn parse_date(raw: &str) -> DuitResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        DuitError::Validation(format!(
            "Invalid date '{}'. Use the format YYYY-MM-DD.",
            raw
        ))
    })
}
