//! Result persistence - local, append-only, single-writer
//!
//! Finished games are appended to an ordered JSON list in the data directory
//! and read back for the leaderboard. The store is deliberately forgiving on
//! the read side: a missing or malformed file degrades to an empty result
//! list rather than an error, matching the interactive application's
//! "everything recoverable" error model.
//!
//! # Files
//!
//! - `memory_game_results.json` - the canonical store: a JSON array of
//!   [`ResultRecord`] with ISO (`YYYY-MM-DD`) dates.
//! - `memoryResults.json` - a legacy file with a divergent schema. It is
//!   absorbed into the canonical file once on open and then removed; only
//!   the canonical schema is ever written.
//!
//! # Concurrency
//!
//! Single writer by construction: only the game loop appends, the
//! leaderboard view only reads the in-memory list. No locking is needed.

pub mod leaderboard;
pub mod record;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use memory_core::GameOutcome;
use memory_types::Level;

pub use leaderboard::daily_rows;
pub use record::{normalize_date, ResultRecord, DATE_FMT};

use record::LegacyRecord;

/// Canonical results file name.
pub const RESULTS_FILE: &str = "memory_game_results.json";

/// Legacy results file name (read-compat only).
pub const LEGACY_RESULTS_FILE: &str = "memoryResults.json";

/// Persistence errors. Only writes surface these; reads degrade to empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("result store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted, append-only result list.
#[derive(Debug)]
pub struct ResultStore {
    dir: PathBuf,
    results: Vec<ResultRecord>,
}

impl ResultStore {
    /// Open the store in `dir`, absorbing any legacy file found there.
    ///
    /// Never fails: unreadable or malformed files are treated as empty.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut results = load_records(&dir.join(RESULTS_FILE));

        // Older canonical files may carry legacy-format dates.
        for record in &mut results {
            record.date = normalize_date(&record.date);
        }

        let legacy_path = dir.join(LEGACY_RESULTS_FILE);
        let legacy = load_legacy_records(&legacy_path);
        if !legacy.is_empty() {
            results.extend(legacy.into_iter().map(ResultRecord::from));
            let store = Self { dir, results };
            // Migration is best-effort; a failed save just retries next open.
            if store.save().is_ok() {
                let _ = fs::remove_file(&legacy_path);
            }
            return store;
        }

        Self { dir, results }
    }

    /// Open the store in the platform data directory
    /// (`<data_dir>/tui-memory`), falling back to the current directory.
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .map(|d| d.join("tui-memory"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::open(dir)
    }

    /// All records, in append order.
    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    /// Append a record and persist the whole list.
    ///
    /// Prior records are never mutated.
    pub fn append(&mut self, record: ResultRecord) -> Result<(), StoreError> {
        self.results.push(record);
        self.save()
    }

    /// Convenience wrapper around [`ResultRecord::from_outcome`] + append.
    pub fn record_outcome(
        &mut self,
        outcome: &GameOutcome,
        username: &str,
        date: chrono::NaiveDate,
    ) -> Result<(), StoreError> {
        self.append(ResultRecord::from_outcome(outcome, username, date))
    }

    /// Leaderboard rows for one level and ISO date.
    pub fn leaderboard(&self, level: Level, date: &str) -> Vec<ResultRecord> {
        daily_rows(&self.results, level, date)
    }

    fn save(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(&self.results)?;
        fs::write(self.dir.join(RESULTS_FILE), json)?;
        Ok(())
    }
}

fn load_records(path: &Path) -> Vec<ResultRecord> {
    let Ok(data) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&data).unwrap_or_default()
}

fn load_legacy_records(path: &Path) -> Vec<LegacyRecord> {
    let Ok(data) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&data).unwrap_or_default()
}
