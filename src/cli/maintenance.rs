//! Maintenance CLI commands
//!
//! Clear-all with confirmation, demo data seeding, and path inspection.

use std::io::{self, BufRead, Write};

use chrono::{Datelike, Local, NaiveDate};

use crate::config::DuitPaths;
use crate::display::format_monthly_summary;
use crate::error::{DuitError, DuitResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::reports::summarize;
use crate::storage::Store;

use super::load_with_warning;

/// Confirmation token required to clear the ledger
const CLEAR_CONFIRMATION: &str = "YES";

/// Handle the clear command
///
/// Prompts for an exact confirmation token unless `yes` was passed; anything
/// else cancels without touching the ledger.
pub fn handle_clear_command(store: &Store, yes: bool) -> DuitResult<()> {
    if !yes && !confirm_clear()? {
        println!("Cancelled. Ledger unchanged.");
        return Ok(());
    }

    store.clear_all()?;
    println!("All transactions deleted.");
    Ok(())
}

fn confirm_clear() -> DuitResult<bool> {
    print!(
        "This permanently deletes every transaction. Type \"{}\" to confirm: ",
        CLEAR_CONFIRMATION
    );
    io::stdout()
        .flush()
        .map_err(|e| DuitError::Storage(format!("Failed to flush stdout: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| DuitError::Storage(format!("Failed to read confirmation: {}", e)))?;

    Ok(line.trim().eq_ignore_ascii_case(CLEAR_CONFIRMATION))
}

/// Handle the demo command: seed three sample transactions into the current
/// month and print its summary
pub fn handle_demo_command(store: &Store) -> DuitResult<()> {
    let today = Local::now().date_naive();
    let (year, month) = (today.year(), today.month());
    let day = |d: u32| NaiveDate::from_ymd_opt(year, month, d).unwrap_or(today);

    let samples = [
        Transaction::new(TransactionKind::Income, Money::from_major(5_000_000))
            .with_category("Salary")
            .with_note("Monthly salary")
            .with_date(day(1)),
        Transaction::new(TransactionKind::Expense, Money::from_major(1_500_000))
            .with_category("Rent")
            .with_note("House rent")
            .with_date(day(2)),
        Transaction::new(TransactionKind::Expense, Money::from_major(300_000))
            .with_category("Food")
            .with_note("Food and groceries")
            .with_date(day(5)),
    ];

    for tx in samples {
        store.append(tx)?;
    }
    println!("Demo: added 3 sample transactions.");

    let ledger = load_with_warning(store);
    let summary = summarize(&ledger, year, month);
    print!("{}", format_monthly_summary(year, month, &summary));
    Ok(())
}

/// Handle the config command: print resolved paths
pub fn handle_config_command(paths: &DuitPaths) -> DuitResult<()> {
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Ledger file:    {}", paths.ledger_file().display());
    Ok(())
}
