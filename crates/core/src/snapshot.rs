use crate::pieces::Tetromino;
use crate::types::Cell;

/// Read-only copy of everything a frontend draws in one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    /// Row-major, falling piece included
    pub board: Vec<Cell>,
    pub falling: Option<Tetromino>,
    pub next: Option<Tetromino>,
    pub stored: Option<Tetromino>,
    pub points: u32,
    pub level: u32,
    pub lines_remaining: u32,
    pub ticks_till_gravity: i32,
    /// Set by the frontend; the engine itself has no pause state.
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell at `(row, col)`, `Empty` outside the board
    pub fn cell(&self, row: u16, col: u16) -> Cell {
        if row >= self.rows || col >= self.cols {
            return Cell::Empty;
        }
        self.board[row as usize * self.cols as usize + col as usize]
    }
}
