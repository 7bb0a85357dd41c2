//! The transaction store
//!
//! Owns the durable ledger document. Every operation re-reads the file, so
//! a store holds no in-memory state beyond its path; external changes
//! between operations are simply visible on the next load.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

use crate::error::{DuitError, DuitResult};
use crate::models::{Ledger, Transaction};

use super::file_io::{read_to_string_opt, write_json_atomic};

/// Warning produced when the ledger document exists but cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Path of the offending document
    pub path: PathBuf,
    /// Why it could not be read or parsed
    pub reason: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not read ledger {}: {}; starting from an empty ledger",
            self.path.display(),
            self.reason
        )
    }
}

/// Result of loading the ledger document
///
/// Loading never fails: a missing file is an empty ledger, and a malformed
/// one is an empty ledger plus a warning. The malformed file itself is left
/// untouched on disk.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub ledger: Ledger,
    pub warning: Option<LoadWarning>,
}

/// Durable store for the ledger, backed by one JSON document
///
/// The path is injected at construction; there is no process-wide default.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store over the given ledger file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger fresh from disk
    ///
    /// Missing file means an empty ledger with no warning. A file that
    /// exists but cannot be read or parsed also yields an empty ledger, with
    /// a [`LoadWarning`] for the caller; the bad file stays on disk.
    pub fn load(&self) -> LoadOutcome {
        let contents = match read_to_string_opt(&self.path) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                return LoadOutcome {
                    ledger: Ledger::default(),
                    warning: None,
                }
            }
            Err(e) => return self.recovered(e.to_string()),
        };

        match serde_json::from_str::<Ledger>(&contents) {
            Ok(ledger) => LoadOutcome {
                ledger,
                warning: None,
            },
            Err(e) => self.recovered(e.to_string()),
        }
    }

    /// Empty-ledger outcome carrying a recovery warning
    fn recovered(&self, reason: String) -> LoadOutcome {
        LoadOutcome {
            ledger: Ledger::default(),
            warning: Some(LoadWarning {
                path: self.path.clone(),
                reason,
            }),
        }
    }

    /// Append a transaction and persist the full ledger
    ///
    /// Rejects negative amounts before anything touches disk. Only a failed
    /// write surfaces as an error, and a failed write leaves the previous
    /// on-disk document intact.
    pub fn append(&self, tx: Transaction) -> DuitResult<()> {
        if tx.amount.is_negative() {
            return Err(DuitError::Validation(format!(
                "transaction amount must not be negative (got {})",
                tx.amount
            )));
        }

        let mut ledger = self.load_for_write()?;
        ledger.push(tx);
        self.persist(&ledger)
    }

    /// Replace the ledger with an empty one, discarding every transaction
    ///
    /// Unconditional; the caller is responsible for obtaining explicit user
    /// confirmation first.
    pub fn clear_all(&self) -> DuitResult<()> {
        self.load_for_write()?;
        self.persist(&Ledger::default())
    }

    /// Serialize the full ledger, overwriting the prior document entirely
    ///
    /// The single point where durable state changes.
    pub fn persist(&self, ledger: &Ledger) -> DuitResult<()> {
        write_json_atomic(&self.path, ledger)
    }

    /// Load before a mutating write, setting a malformed document aside
    ///
    /// An unreadable document would otherwise be silently overwritten by the
    /// next persist. Renaming it keeps the original bytes recoverable.
    fn load_for_write(&self) -> DuitResult<Ledger> {
        let LoadOutcome { ledger, warning } = self.load();
        if let Some(warning) = warning {
            warn!(%warning, "setting malformed ledger aside before writing");
            let aside = self.corrupt_path();
            fs::rename(&self.path, &aside).map_err(|e| {
                DuitError::Storage(format!(
                    "Failed to set aside malformed ledger {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
            warn!(path = %aside.display(), "malformed ledger preserved");
        }
        Ok(ledger)
    }

    /// Sibling path the malformed document is renamed to
    fn corrupt_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%dT%H%M%S");
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ledger.json".to_string());
        self.path
            .with_file_name(format!("{}.corrupt-{}", file_name, stamp))
    }
}
