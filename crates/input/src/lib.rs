//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into player [`Command`]s and provides a grid
//! cursor that turns movement into board indices for the core.

pub mod handler;
pub mod map;

pub use memory_types as types;

pub use handler::GridCursor;
pub use map::{handle_key_event, should_quit, Command};
