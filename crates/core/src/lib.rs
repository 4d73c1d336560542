//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same shuffles
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: can run headless (the integration tests do)
//!
//! # Module Structure
//!
//! - [`deck`]: shuffled card layout (each value exactly twice)
//! - [`game_state`]: turn controller, clocks, scoring, and game lifecycle
//! - [`results`]: win and performance-tier evaluation
//! - [`rng`]: seedable LCG with Fisher-Yates shuffling
//! - [`snapshot`]: render-facing copy of one frame of state
//!
//! # Game Rules
//!
//! - Cards flip in pairs; a value match solves both positions permanently
//!   and scores one point, a mismatch shows both cards for one second.
//! - The board locks while a resolution is displayed; selections during the
//!   lock are no-ops.
//! - The countdown and the elapsed clock advance once per second while the
//!   game runs; pausing freezes both at their exact values.
//! - Clearing every pair, or the countdown reaching zero, ends the game and
//!   produces a [`results::GameOutcome`].
//!
//! # Example
//!
//! ```
//! use memory_core::GameState;
//! use memory_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.set_username("player");
//! game.apply_action(GameAction::Start);
//!
//! // Flip the first two cards (they may or may not match).
//! game.apply_action(GameAction::SelectCard(0));
//! game.apply_action(GameAction::SelectCard(1));
//!
//! // Advance the clocks by one frame.
//! game.tick(16);
//! ```
//!
//! # Timing
//!
//! The state machine is driven by a fixed timestep: call
//! [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Whole-second boundaries drive the two game clocks;
//! sub-second countdowns drive the resolution locks and transient windows.

pub mod deck;
pub mod game_state;
pub mod results;
pub mod rng;
pub mod snapshot;

pub use memory_types as types;

// Re-export commonly used types for convenience
pub use deck::Deck;
pub use game_state::{CardRef, Effect, GameState, Notice};
pub use results::{evaluate_tier, GameOutcome};
pub use rng::SimpleRng;
pub use snapshot::{CardView, GameSnapshot};
