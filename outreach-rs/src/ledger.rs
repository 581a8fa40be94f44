//! Persisted sent-log ("ledger")
//!
//! The ledger is an append-only CSV recording every recipient that was
//! actually sent to: `key,cced,timestamp`. The accumulated first-column set
//! is the "already sent" set consulted at the start of a run. Entries are
//! never modified or removed.

use crate::error::{OutreachError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct SentLedger {
    path: PathBuf,
}

impl SentLedger {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the set of all previously recorded dedupe keys.
    ///
    /// A missing file is an empty ledger, not an error. Only the first
    /// column is read, so older two-column logs stay readable.
    pub fn load(&self) -> Result<HashSet<String>> {
        if !self.path.exists() {
            debug!("No sent-log at {}, starting empty", self.path.display());
            return Ok(HashSet::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let mut keys = HashSet::new();
        for record in reader.records() {
            let record = record?;
            if let Some(key) = record.get(0) {
                if !key.is_empty() {
                    keys.insert(key.to_string());
                }
            }
        }

        debug!("Loaded {} keys from {}", keys.len(), self.path.display());
        Ok(keys)
    }

    /// Append one entry, writing the header first if the file is new.
    ///
    /// Each call is a single atomic append. Failure here after a successful
    /// send means the email went out unrecorded, so the error must reach the
    /// operator.
    pub fn append(&self, key: &str, cced: bool, timestamp: DateTime<Utc>) -> Result<()> {
        let existed = self.path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| {
                OutreachError::LedgerWrite(format!("{}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if !existed {
            writer
                .write_record(["key", "cced", "timestamp"])
                .map_err(|e| OutreachError::LedgerWrite(e.to_string()))?;
        }

        let timestamp = timestamp.to_rfc3339();
        writer
            .write_record([key, if cced { "yes" } else { "no" }, timestamp.as_str()])
            .map_err(|e| OutreachError::LedgerWrite(e.to_string()))?;

        writer
            .flush()
            .map_err(|e| OutreachError::LedgerWrite(e.to_string()))?;

        Ok(())
    }
}
