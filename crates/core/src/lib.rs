//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the board, the
//! shape table, the piece source, scoring and the tick-driven engine. It does
//! no I/O and keeps no clock of its own; time only moves when the caller
//! invokes [`GameState::tick`].
//!
//! # Module Structure
//!
//! - [`board`]: variable-size grid with fit testing and cascading line clears
//! - [`game_state`]: falling/next/held pieces, gravity, commands, game over
//! - [`pieces`]: shape table and the [`Tetromino`] value type
//! - [`rng`]: seedable piece source, plus a fixed sequence for tests
//! - [`scoring`]: classic line scores, leveling and the gravity schedule
//! - [`snapshot`]: read-only frame data for frontends
//!
//! # Rules
//!
//! - Gravity moves the falling piece down one row every `GRAVITY_LEVEL[level]`
//!   ticks; a piece that cannot descend locks at once.
//! - Rotation tries the next orientation at the current column, then one
//!   column left, then one column right, cycling through all four.
//! - Hold swaps the falling piece with the held one, unlimited times.
//! - The game ends when any locked cell sits in the top two rows.
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::GameState;
//! use tick_tetris_core::types::Command;
//!
//! let mut game = GameState::new(22, 10, 12345).unwrap();
//! assert!(game.tick(Command::MoveRight));
//! assert!(game.tick(Command::HardDrop));
//! assert_eq!(game.points(), 0);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use game_state::GameState;
pub use pieces::{get_shape, Tetromino};
pub use rng::{FixedSequence, PieceSource, SimpleRng};
pub use scoring::{calculate_line_score, gravity_ticks, LevelProgress};
pub use snapshot::GameSnapshot;
