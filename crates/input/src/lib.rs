//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. The engine
//! consumes at most one command per tick; pause and quit never reach it and
//! are checked separately.

pub mod map;

pub use tick_tetris_types as types;

pub use map::{is_pause, map_key, should_quit};
