//! Result record schema.
//!
//! The canonical schema is the one written to disk. A legacy file with a
//! slightly different shape (no level/won fields, `"%a %b %d %Y"` dates) is
//! still readable; see [`LegacyRecord`] and [`normalize_date`].

use chrono::NaiveDate;
use memory_core::GameOutcome;
use serde::{Deserialize, Serialize};

/// Canonical ISO date format used on disk (`YYYY-MM-DD`).
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Date format used by the legacy result file (e.g. `Mon Apr 01 2024`).
const LEGACY_DATE_FMT: &str = "%a %b %d %Y";

/// One finished game, as persisted. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub username: String,
    pub score: u16,
    /// Elapsed seconds.
    pub time: u32,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Level number, 1..=3.
    pub level: u8,
    pub won: bool,
}

impl ResultRecord {
    /// Build a record from a finished game's outcome.
    pub fn from_outcome(outcome: &GameOutcome, username: &str, date: NaiveDate) -> Self {
        Self {
            username: username.to_string(),
            score: outcome.score,
            time: outcome.elapsed_secs,
            date: date.format(DATE_FMT).to_string(),
            level: outcome.level.as_number(),
            won: outcome.won,
        }
    }
}

/// Record shape of the legacy result file: no level or win flag, and a
/// locale-style date string.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRecord {
    pub username: String,
    pub score: u16,
    pub time: u32,
    pub date: String,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub won: bool,
}

fn default_level() -> u8 {
    1
}

impl From<LegacyRecord> for ResultRecord {
    fn from(legacy: LegacyRecord) -> Self {
        Self {
            username: legacy.username,
            score: legacy.score,
            time: legacy.time,
            date: normalize_date(&legacy.date),
            level: legacy.level,
            won: legacy.won,
        }
    }
}

/// Normalize a stored date string to the canonical ISO form.
///
/// Accepts ISO dates as-is and converts legacy `"%a %b %d %Y"` strings;
/// anything unparseable is passed through unchanged (it will simply never
/// match a leaderboard date filter).
pub fn normalize_date(date: &str) -> String {
    if NaiveDate::parse_from_str(date, DATE_FMT).is_ok() {
        return date.to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(date, LEGACY_DATE_FMT) {
        return parsed.format(DATE_FMT).to_string();
    }
    date.to_string()
}
