//! Summary CLI command

use chrono::{Datelike, Local};

use crate::display::format_monthly_summary;
use crate::error::{DuitError, DuitResult};
use crate::reports::summarize;
use crate::storage::Store;

use super::load_with_warning;

/// Handle the summary command; year/month default to the current month
pub fn handle_summary_command(
    store: &Store,
    year: Option<i32>,
    month: Option<u32>,
) -> DuitResult<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    if !(1..=12).contains(&month) {
        return Err(DuitError::Validation(format!(
            "Invalid month '{}'. Use a value from 1 to 12.",
            month
        )));
    }

    let ledger = load_with_warning(store);
    let summary = summarize(&ledger, year, month);
    print!("{}", format_monthly_summary(year, month, &summary));
    Ok(())
}
