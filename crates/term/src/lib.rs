//! Terminal rendering layer for the memory game.
//!
//! Rendering is split in two: `GameView` maps a game snapshot into a plain
//! framebuffer (pure, unit-testable), and `TerminalRenderer` flushes
//! framebuffers to the real terminal with diff-based updates.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw whole frames, then emit only the cells that changed
//! - Own the raw-mode terminal lifecycle in one place

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_core as core;
pub use memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_secs, notice_text, GameView, LeaderboardRow, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
