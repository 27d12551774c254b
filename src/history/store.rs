//! Flat JSON history file: the only persisted state.
//!
//! The whole array is loaded in memory and rewritten on every append.
//! There is no locking: two processes appending at the same time can lose
//! one of the records.

use crate::errors::AppResult;
use crate::models::MoodRecord;
use crate::ui::messages::warning;
use chrono::Local;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct HistoryStore {
    path: PathBuf,
}

/// Result of reading the file, before any fallback is applied.
struct Loaded {
    records: Vec<MoodRecord>,
    corrupt: bool,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return every record ever written.
    ///
    /// - missing or empty file → empty history
    /// - content that is not a JSON array (or not UTF-8) → warning, empty history
    /// - invalid array entries → skipped with a warning
    pub fn load_all(&self) -> AppResult<Vec<MoodRecord>> {
        Ok(self.read()?.records)
    }

    /// Append one record and persist the full history.
    pub fn append(&self, record: &MoodRecord) -> AppResult<()> {
        let loaded = self.read()?;

        if loaded.corrupt {
            let backup = self.corrupt_copy_path();
            fs::copy(&self.path, &backup)?;
            warning(format!(
                "Corrupted history preserved as {} before rewriting.",
                backup.display()
            ));
        }

        let mut records = loaded.records;
        records.push(record.clone());
        self.save(&records)
    }

    fn save(&self, records: &[MoodRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        log::debug!(
            "history saved: {} records in {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn read(&self) -> AppResult<Loaded> {
        if !self.path.exists() {
            return Ok(Loaded {
                records: Vec::new(),
                corrupt: false,
            });
        }

        let content = fs::read(&self.path)?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Loaded {
                records: Vec::new(),
                corrupt: false,
            });
        }

        let entries = match serde_json::from_slice::<Value>(&content) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) | Err(_) => {
                log::warn!("history file {} is corrupted", self.path.display());
                warning(format!(
                    "{} is corrupted or not a JSON array. Treating history as empty.",
                    self.path.display()
                ));
                return Ok(Loaded {
                    records: Vec::new(),
                    corrupt: true,
                });
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut skipped = 0usize;
        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<MoodRecord>(entry) {
                Ok(r) => records.push(r),
                Err(e) => {
                    skipped += 1;
                    log::warn!("skipping history entry #{idx}: {e}");
                }
            }
        }

        // Skipped entries would be dropped by the next rewrite.
        Ok(Loaded {
            records,
            corrupt: skipped > 0,
        })
    }

    /// `<file>.corrupt`, or a timestamped variant when an earlier copy exists.
    fn corrupt_copy_path(&self) -> PathBuf {
        let base = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let plain = self.path.with_file_name(format!("{base}.corrupt"));
        if !plain.exists() {
            return plain;
        }

        let stamp = Local::now().format("%Y%m%d%H%M%S");
        let mut candidate = self.path.with_file_name(format!("{base}.corrupt.{stamp}"));
        let mut n = 1;
        while candidate.exists() {
            candidate = self
                .path
                .with_file_name(format!("{base}.corrupt.{stamp}-{n}"));
            n += 1;
        }
        candidate
    }
}
