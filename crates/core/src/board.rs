//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid fixed at construction. Cells live in a
//! flat row-major vector. Coordinates are `(row, col)` with row 0 at the top.
//!
//! `fits`, `place` and `clear` are the placement primitives every piece
//! movement is built from: take the piece off, change it, test, put it back.

use crate::pieces::Tetromino;
use crate::types::{Cell, DANGER_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows as usize * cols as usize],
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Check whether `(row, col)` lies on the board
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        0 <= row && row < self.rows as i32 && 0 <= col && col < self.cols as i32
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_vacant(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Check that every cell of `piece` is in bounds and empty
    pub fn fits(&self, piece: &Tetromino) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(row, col)| self.is_vacant(row, col))
    }

    /// Write the piece's kind into its cells
    ///
    /// Cells outside the board are skipped; callers only place pieces that
    /// passed [`Board::fits`].
    pub fn place(&mut self, piece: &Tetromino) {
        for (row, col) in piece.cells() {
            self.set(row, col, Cell::Filled(piece.kind));
        }
    }

    /// Empty the piece's cells
    pub fn clear(&mut self, piece: &Tetromino) {
        for (row, col) in piece.cells() {
            self.set(row, col, Cell::Empty);
        }
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let width = self.cols as usize;
        &self.cells[row * width..(row + 1) * width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        self.row_slice(row).iter().all(Cell::is_filled)
    }

    /// Check if a row has any filled cell
    pub fn is_row_occupied(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        self.row_slice(row).iter().any(Cell::is_filled)
    }

    /// Remove `row`: every row above it moves down one and the top row is emptied
    pub fn shift_down(&mut self, row: usize) {
        if row >= self.rows as usize {
            return;
        }
        let width = self.cols as usize;

        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(Cell::Empty);
    }

    /// Clear every full row and return how many were removed
    ///
    /// Scans bottom to top. After a shift the same row index is tested again,
    /// since the row that dropped into it may be full as well.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.rows as usize;
        while row > 0 {
            if self.is_row_full(row - 1) {
                self.shift_down(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Any filled cell in the top rows
    pub fn is_topped_out(&self) -> bool {
        (0..DANGER_ROWS).any(|row| self.is_row_occupied(row))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Fill a whole row with one kind
    pub fn fill_row(&mut self, row: usize, cell: Cell) {
        if row >= self.rows as usize {
            return;
        }
        let width = self.cols as usize;
        self.cells[row * width..(row + 1) * width].fill(cell);
    }

    /// Create from a picture, one string per row; `.` is empty and a piece
    /// letter is a filled cell
    #[cfg(test)]
    pub fn from_rows(picture: &[&str]) -> Self {
        use crate::types::PieceKind;

        let rows = picture.len() as u16;
        let cols = picture.first().map_or(0, |r| r.len()) as u16;
        let mut board = Self::new(rows, cols);
        for (r, line) in picture.iter().enumerate() {
            assert_eq!(line.len(), cols as usize, "ragged row {r}");
            for (c, ch) in line.chars().enumerate() {
                let cell = match PieceKind::from_str(&ch.to_string()) {
                    Some(kind) => Cell::Filled(kind),
                    None => Cell::Empty,
                };
                board.set(r as i32, c as i32, cell);
            }
        }
        board
    }
}
