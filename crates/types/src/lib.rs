//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Levels
//!
//! | Level | Pairs | Time budget | Grid columns |
//! |-------|-------|-------------|--------------|
//! | One   | 10    | 60 s        | 5            |
//! | Two   | 20    | 120 s       | 8            |
//! | Three | 30    | 210 s       | 10           |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SECOND_MS` | 1000 | Game clock granularity (both clocks tick per second) |
//! | `MATCH_LOCK_MS` | 500 | Board lock while a match is displayed |
//! | `MISMATCH_LOCK_MS` | 1000 | Board lock while a failed pair is displayed |
//! | `COUNTDOWN_FLASH_MS` | 900 | Self-clear window for the countdown flash |
//! | `NOTICE_MS` | 2000 | Self-clear window for transient notices |
//!
//! # Examples
//!
//! ```
//! use memory_types::{Level, PerformanceTier};
//!
//! let level = Level::One;
//! assert_eq!(level.pair_count(), 10);
//! assert_eq!(level.time_budget_secs(), 60);
//! assert_eq!(level.next(), Some(Level::Two));
//! assert_eq!(Level::Three.next(), None);
//!
//! assert_eq!(PerformanceTier::Top.label(), "Perfect!");
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Upper bound on cards per board (level three: 30 pairs).
pub const MAX_CARDS: usize = 60;

/// Game clock granularity: both the countdown and the elapsed clock advance
/// once per full second.
pub const SECOND_MS: u32 = 1000;

/// Board lock duration while a successful match is displayed.
pub const MATCH_LOCK_MS: u32 = 500;

/// Board lock duration while a failed pair stays revealed.
pub const MISMATCH_LOCK_MS: u32 = 1000;

/// The countdown flash fires when remaining time drops into `1..=COUNTDOWN_FLASH_FROM`.
pub const COUNTDOWN_FLASH_FROM: u32 = 5;

/// Self-clear window for the countdown flash.
pub const COUNTDOWN_FLASH_MS: u32 = 900;

/// Self-clear window for transient user notices.
pub const NOTICE_MS: u32 = 2000;

/// Elapsed-time ceiling for the top performance tier (seconds).
pub const TOP_TIER_TIME_SECS: u32 = 30;

/// Elapsed-time ceiling for the middle performance tier (seconds).
pub const MIDDLE_TIER_TIME_SECS: u32 = 50;

/// Score ratio floor for the middle tier, as numerator/denominator (0.6).
pub const MIDDLE_TIER_RATIO_NUM: u32 = 3;
pub const MIDDLE_TIER_RATIO_DEN: u32 = 5;

/// Difficulty level, determining pair count, grid shape, and time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// Number of card pairs on the board.
    pub fn pair_count(&self) -> u16 {
        match self {
            Level::One => 10,
            Level::Two => 20,
            Level::Three => 30,
        }
    }

    /// Total number of cards on the board (two per pair).
    pub fn card_count(&self) -> u16 {
        self.pair_count() * 2
    }

    /// Countdown budget in seconds.
    pub fn time_budget_secs(&self) -> u32 {
        match self {
            Level::One => 60,
            Level::Two => 120,
            Level::Three => 210,
        }
    }

    /// Grid width in cards.
    pub fn grid_cols(&self) -> u16 {
        match self {
            Level::One => 5,
            Level::Two => 8,
            Level::Three => 10,
        }
    }

    /// Grid height in cards.
    pub fn grid_rows(&self) -> u16 {
        self.card_count().div_ceil(self.grid_cols())
    }

    /// The next level, if any.
    pub fn next(&self) -> Option<Level> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => Some(Level::Three),
            Level::Three => None,
        }
    }

    /// Numeric form used in result records and on screen (1..=3).
    pub fn as_number(&self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// Parse the numeric form.
    pub fn from_number(n: u8) -> Option<Level> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::One
    }
}

/// Derived display state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Face down, selectable.
    Hidden,
    /// Face up as the pending selection or mid-resolution.
    Revealed,
    /// Permanently solved; never selectable again.
    Matched,
}

/// Game actions (view → core calls).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flip the card at the given board position.
    SelectCard(u16),
    /// Start (or restart) a game of the current level.
    Start,
    /// Advance to the next level after a win.
    NextLevel,
    /// Toggle the pause state.
    PauseToggle,
    /// Reset wholesale back to the home screen.
    GoHome,
}

/// Coarse qualitative rating derived from score ratio and elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PerformanceTier {
    Bottom,
    Middle,
    Top,
}

impl PerformanceTier {
    /// On-screen label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Top => "Perfect!",
            PerformanceTier::Middle => "Great!",
            PerformanceTier::Bottom => "Keep Trying!",
        }
    }
}

/// Sound cues emitted by the state machine; the presentation decides how
/// (or whether) to play them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Match,
    GameStart,
    GameOver,
    Win,
    LevelUp,
    Error,
}
