//! CLI command handlers
//!
//! Thin presentation layer over the core API: validates raw user input into
//! well-formed transactions, formats output, and gates the destructive
//! clear operation behind an explicit confirmation.

pub mod maintenance;
pub mod report;
pub mod transaction;

pub use maintenance::{handle_clear_command, handle_config_command, handle_demo_command};
pub use report::handle_summary_command;
pub use transaction::{handle_add_command, handle_list_command, AddCommands};

use crate::models::Ledger;
use crate::storage::{LoadOutcome, Store};

/// Load the ledger, surfacing a recovery warning to the user if any
pub(crate) fn load_with_warning(store: &Store) -> Ledger {
    let LoadOutcome { ledger, warning } = store.load();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "recovered from unreadable ledger");
        eprintln!("Warning: {}", warning);
    }
    ledger
}
