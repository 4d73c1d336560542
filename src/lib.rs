//! TUI memory game (workspace facade crate).
//!
//! This package keeps the `tui_memory::{core,input,store,term,types}` public
//! API in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use memory_core as core;
pub use memory_input as input;
pub use memory_store as store;
pub use memory_term as term;
pub use memory_types as types;
