//! Results module - win and performance-tier evaluation
//!
//! Evaluated exactly once, on the game-over transition. The thresholds are
//! fixed: a perfect score inside 30 seconds rates Top, at least 60% of the
//! pairs inside 50 seconds rates Middle, anything else Bottom.

use memory_types::{
    Level, PerformanceTier, MIDDLE_TIER_RATIO_DEN, MIDDLE_TIER_RATIO_NUM, MIDDLE_TIER_TIME_SECS,
    TOP_TIER_TIME_SECS,
};

/// Immutable summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub level: Level,
    pub score: u16,
    pub elapsed_secs: u32,
    pub won: bool,
    pub tier: PerformanceTier,
}

impl GameOutcome {
    /// Evaluate a finished game.
    pub fn evaluate(level: Level, score: u16, elapsed_secs: u32) -> Self {
        let total = level.pair_count();
        Self {
            level,
            score,
            elapsed_secs,
            won: score == total,
            tier: evaluate_tier(score, total, elapsed_secs),
        }
    }
}

/// Rate a score/time combination against the fixed thresholds.
///
/// Ratios are compared in integer arithmetic to keep the core float-free.
pub fn evaluate_tier(score: u16, total: u16, elapsed_secs: u32) -> PerformanceTier {
    if score == total && elapsed_secs <= TOP_TIER_TIME_SECS {
        return PerformanceTier::Top;
    }
    // score/total >= 3/5  <=>  score * 5 >= total * 3
    let meets_ratio =
        (score as u32) * MIDDLE_TIER_RATIO_DEN >= (total as u32) * MIDDLE_TIER_RATIO_NUM;
    if meets_ratio && elapsed_secs <= MIDDLE_TIER_TIME_SECS {
        return PerformanceTier::Middle;
    }
    PerformanceTier::Bottom
}
