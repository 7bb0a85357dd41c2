//! Storage layer for duit
//!
//! Persists the ledger as a single JSON document with atomic whole-file
//! rewrites.

pub mod file_io;
pub mod store;

pub use file_io::write_json_atomic;
pub use store::{LoadOutcome, LoadWarning, Store};
