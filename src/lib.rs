//! duit - a command-line personal finance ledger
//!
//! Records discrete income and expense events, persists them as a single
//! JSON document, and computes monthly aggregate summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, the ledger)
//! - `storage`: The store - durable persistence of the ledger as one JSON file
//! - `reports`: Monthly aggregation over a ledger snapshot
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers for the `duit` binary
//!
//! The core exposes four operations to its callers: load, append, clear-all,
//! and summarize. Everything in `cli` and `display` is presentation over
//! that API.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{DuitError, DuitResult};
