//! Tick Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks can write `tick_tetris::core::...`.

pub use tick_tetris_core as core;
pub use tick_tetris_input as input;
pub use tick_tetris_term as term;
pub use tick_tetris_types as types;
