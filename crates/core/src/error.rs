use thiserror::Error;

use crate::types::{MIN_COLS, MIN_ROWS};

/// Errors from setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(
        "board must be at least {min_rows}x{min_cols}, got {rows}x{cols}",
        min_rows = MIN_ROWS,
        min_cols = MIN_COLS
    )]
    InvalidDimensions { rows: u16, cols: u16 },
}
