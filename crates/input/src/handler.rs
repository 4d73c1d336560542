//! Grid cursor: turns movement commands into a board index.
//!
//! The board is a row-major grid whose last row may be partial (level two
//! lays 40 cards out in 8 columns, level three 60 in 10). Movement clamps to
//! valid card positions rather than wrapping.

use crate::map::Command;
use memory_types::{GameAction, Level};

/// Keyboard-driven selection cursor over the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    cols: u16,
    count: u16,
    index: u16,
}

impl GridCursor {
    /// Cursor for the given level's grid, starting at the top-left card.
    pub fn for_level(level: Level) -> Self {
        Self {
            cols: level.grid_cols(),
            count: level.card_count(),
            index: 0,
        }
    }

    /// Current board position.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Re-shape the grid (level change), clamping the position.
    pub fn reshape(&mut self, level: Level) {
        self.cols = level.grid_cols();
        self.count = level.card_count();
        self.index = self.index.min(self.count.saturating_sub(1));
    }

    /// Apply a movement or flip command.
    ///
    /// Movement returns `None` (it only updates the cursor); `Flip` returns
    /// the select action for the current position. Non-cursor commands map
    /// straight onto their game actions.
    pub fn apply(&mut self, command: Command) -> Option<GameAction> {
        match command {
            Command::CursorLeft => {
                if self.index % self.cols > 0 {
                    self.index -= 1;
                }
                None
            }
            Command::CursorRight => {
                let at_row_end = self.index % self.cols == self.cols - 1;
                if !at_row_end && self.index + 1 < self.count {
                    self.index += 1;
                }
                None
            }
            Command::CursorUp => {
                if self.index >= self.cols {
                    self.index -= self.cols;
                }
                None
            }
            Command::CursorDown => {
                let below = self.index + self.cols;
                if below < self.count {
                    self.index = below;
                } else {
                    // Partial last row: fall to its final card if one exists
                    // below-left of the cursor.
                    let last = self.count - 1;
                    if last / self.cols > self.index / self.cols {
                        self.index = last;
                    }
                }
                None
            }
            Command::Flip => Some(GameAction::SelectCard(self.index)),
            Command::Pause => Some(GameAction::PauseToggle),
            Command::Replay => Some(GameAction::Start),
            Command::NextLevel => Some(GameAction::NextLevel),
            Command::Home => Some(GameAction::GoHome),
            Command::Quit => None,
        }
    }
}
