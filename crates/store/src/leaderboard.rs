//! Leaderboard queries over the result list.

use crate::record::ResultRecord;
use memory_types::Level;

/// Rows for the per-level daily leaderboard.
///
/// Filters to the given level and ISO date, keeps only each username's most
/// recent result, and orders by score descending, then time ascending.
pub fn daily_rows(results: &[ResultRecord], level: Level, date: &str) -> Vec<ResultRecord> {
    let mut rows: Vec<ResultRecord> = Vec::new();

    for record in results {
        if record.level != level.as_number() || record.date != date {
            continue;
        }
        // Latest result per username wins (the list is append-ordered).
        if let Some(existing) = rows.iter_mut().find(|r| r.username == record.username) {
            *existing = record.clone();
        } else {
            rows.push(record.clone());
        }
    }

    rows.sort_by(|a, b| b.score.cmp(&a.score).then(a.time.cmp(&b.time)));
    rows
}
