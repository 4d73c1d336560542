//! Render-facing copy of the game state.
//!
//! The terminal layer consumes snapshots instead of borrowing `GameState`
//! directly, which keeps rendering decoupled from the state machine and lets
//! callers reuse one snapshot allocation across frames.

use arrayvec::ArrayVec;

use crate::game_state::Notice;
use crate::results::GameOutcome;
use memory_types::{CardFace, Level, MAX_CARDS};

/// One card as the view sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub value: u16,
    pub face: CardFace,
}

/// Complete view of one frame of the game.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Cards in board order; stack-allocated up to the largest board.
    pub cards: ArrayVec<CardView, MAX_CARDS>,
    pub level: Level,
    pub pair_count: u16,
    pub score: u16,
    pub remaining_secs: u32,
    pub elapsed_secs: u32,
    /// Remaining-seconds value flashed during the final countdown.
    pub countdown_flash: Option<u32>,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub outcome: Option<GameOutcome>,
    pub notice: Option<Notice>,
    pub username: String,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cards: ArrayVec::new(),
            level: Level::One,
            pair_count: Level::One.pair_count(),
            score: 0,
            remaining_secs: Level::One.time_budget_secs(),
            elapsed_secs: 0,
            countdown_flash: None,
            started: false,
            paused: false,
            game_over: false,
            outcome: None,
            notice: None,
            username: String::new(),
        }
    }
}
