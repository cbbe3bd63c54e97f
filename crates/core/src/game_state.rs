//! Game state module - the tick-driven engine
//!
//! This module ties together the board, the shape table, the piece source and
//! scoring. The only mutating entry point is [`GameState::tick`]: gravity
//! first, then one player command, then line clears and scoring, then the
//! game-over check.
//!
//! The falling piece is kept on the board between ticks. Every transform takes
//! it off, changes it, tests the new position with [`Board::fits`] and puts it
//! back, so the board never shows a half-applied move.

use crate::board::Board;
use crate::error::GameError;
use crate::pieces::Tetromino;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{calculate_line_score, gravity_ticks, LevelProgress};
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Command, MIN_COLS, MIN_ROWS, NUM_ORIENTATIONS};

/// Column offsets tried for each orientation during a rotation, in order
const KICKS: [i32; 3] = [0, -1, 1];

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    falling: Tetromino,
    next: Tetromino,
    stored: Option<Tetromino>,
    source: S,
    points: u32,
    progress: LevelProgress,
    ticks_till_gravity: i32,
    /// A freshly spawned piece did not fit. It is never written to the board.
    blocked_out: bool,
    over: bool,
}

impl GameState<SimpleRng> {
    /// Create a new game on a `rows x cols` board with the given RNG seed
    pub fn new(rows: u16, cols: u16, seed: u32) -> Result<Self, GameError> {
        Self::with_source(rows, cols, SimpleRng::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    ///
    /// The first two draws become the falling and next pieces.
    pub fn with_source(rows: u16, cols: u16, mut source: S) -> Result<Self, GameError> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        let first = Tetromino::spawn(source.next_kind(), cols);
        let progress = LevelProgress::start();
        let mut state = Self {
            board: Board::new(rows, cols),
            falling: first,
            next: first,
            stored: None,
            source,
            points: 0,
            progress,
            ticks_till_gravity: gravity_ticks(progress.level) as i32,
            blocked_out: false,
            over: false,
        };
        state.spawn_next();
        state.put_falling();
        Ok(state)
    }

    pub fn rows(&self) -> u16 {
        self.board.rows()
    }

    pub fn cols(&self) -> u16 {
        self.board.cols()
    }

    /// Cell at `(row, col)`, falling piece included; `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn falling(&self) -> Tetromino {
        self.falling
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    /// Held piece; `None` until the first hold
    pub fn stored(&self) -> Option<Tetromino> {
        self.stored
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    /// Lines still needed to reach the next level
    pub fn lines_remaining(&self) -> u32 {
        self.progress.lines_remaining
    }

    /// Ticks until gravity next tries to move the falling piece down
    ///
    /// Can be zero or negative right after a lock: the fresh piece then
    /// tries to descend on the very next tick.
    pub fn ticks_till_gravity(&self) -> i32 {
        self.ticks_till_gravity
    }

    /// True once [`GameState::tick`] has reported the game as finished
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.falling = Some(self.falling);
        out.next = Some(self.next);
        out.stored = self.stored;
        out.points = self.points;
        out.level = self.progress.level;
        out.lines_remaining = self.progress.lines_remaining;
        out.ticks_till_gravity = self.ticks_till_gravity;
        out.game_over = self.over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the game one step
    ///
    /// Returns `true` while play continues and `false` once the game is over.
    /// After that every call returns `false` without touching the state.
    pub fn tick(&mut self, command: Command) -> bool {
        if self.over {
            return false;
        }

        self.gravity_tick();
        if !self.blocked_out {
            self.handle_command(command);
        }

        let cleared = self.clear_lines();
        self.adjust_score(cleared);

        self.over = self.check_game_over();
        !self.over
    }

    fn put_falling(&mut self) {
        if !self.blocked_out {
            self.board.place(&self.falling);
        }
    }

    fn lift_falling(&mut self) {
        if !self.blocked_out {
            self.board.clear(&self.falling);
        }
    }

    /// Promote `next` to falling and draw a new `next`
    ///
    /// The falling piece must be off the board (or locked) when called.
    fn spawn_next(&mut self) {
        self.falling = self.next;
        self.next = Tetromino::spawn(self.source.next_kind(), self.board.cols());
        if !self.board.fits(&self.falling) {
            self.blocked_out = true;
        }
    }

    /// Write the falling piece into the stack and bring in the next one
    fn lock_and_spawn(&mut self) {
        self.board.place(&self.falling);
        self.spawn_next();
    }

    fn gravity_tick(&mut self) {
        self.ticks_till_gravity -= 1;
        if self.ticks_till_gravity > 0 {
            return;
        }

        self.lift_falling();
        self.falling.row += 1;
        if self.board.fits(&self.falling) {
            self.ticks_till_gravity = gravity_ticks(self.progress.level) as i32;
        } else {
            self.falling.row -= 1;
            self.lock_and_spawn();
        }
        self.put_falling();
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::RotateCw => self.rotate(1),
            Command::RotateCcw => self.rotate(-1),
            Command::HardDrop => self.hard_drop(),
            Command::Hold => self.hold(),
            Command::None => {}
        }
    }

    fn shift(&mut self, delta: i32) {
        self.lift_falling();
        self.falling.col += delta;
        if !self.board.fits(&self.falling) {
            self.falling.col -= delta;
        }
        self.put_falling();
    }

    fn hard_drop(&mut self) {
        self.lift_falling();
        while self.board.fits(&self.falling) {
            self.falling.row += 1;
        }
        self.falling.row -= 1;
        self.lock_and_spawn();
        self.put_falling();
    }

    fn rotate(&mut self, step: i8) {
        self.lift_falling();
        let home = self.falling;
        self.falling = self.find_rotation(home, step).unwrap_or(home);
        self.put_falling();
    }

    /// First orientation, stepping from `home`, that fits at the home column
    /// or one column to either side
    ///
    /// A full cycle comes back to `home` itself, so this only returns `None`
    /// if `home` did not fit to begin with.
    fn find_rotation(&self, home: Tetromino, step: i8) -> Option<Tetromino> {
        let mut candidate = home;
        for _ in 0..NUM_ORIENTATIONS {
            candidate.rotation = candidate.rotation.step(step);
            let fit = KICKS
                .iter()
                .map(|&dc| Tetromino {
                    col: home.col + dc,
                    ..candidate
                })
                .find(|p| self.board.fits(p));
            if fit.is_some() {
                return fit;
            }
        }
        None
    }

    fn hold(&mut self) {
        self.lift_falling();
        match self.stored {
            None => {
                self.stored = Some(self.falling);
                self.spawn_next();
            }
            Some(held) => {
                if let Some(swapped) = self.raise_until_fits(Tetromino {
                    kind: held.kind,
                    rotation: held.rotation,
                    ..self.falling
                }) {
                    self.stored = Some(Tetromino {
                        kind: self.falling.kind,
                        rotation: self.falling.rotation,
                        ..held
                    });
                    self.falling = swapped;
                }
            }
        }
        self.put_falling();
    }

    /// Move `piece` up one row at a time until it fits
    ///
    /// There is no floor at row 0 for the origin; the search only stops once
    /// the piece's top cell has left the board, where nothing can fit.
    fn raise_until_fits(&self, mut piece: Tetromino) -> Option<Tetromino> {
        loop {
            if self.board.fits(&piece) {
                return Some(piece);
            }
            if piece.top_row() < 0 {
                return None;
            }
            piece.row -= 1;
        }
    }

    /// Clear full rows of the locked stack; returns the count
    ///
    /// Rows only fill on a lock, so the falling piece is fresh at the top.
    /// If the shifted stack lands on it, that counts as a block-out.
    fn clear_lines(&mut self) -> u32 {
        self.lift_falling();
        let cleared = self.board.clear_full_rows();
        if cleared > 0 && !self.board.fits(&self.falling) {
            self.blocked_out = true;
        }
        self.put_falling();
        cleared
    }

    fn adjust_score(&mut self, cleared: u32) {
        self.points = self
            .points
            .saturating_add(calculate_line_score(cleared, self.progress.level));
        self.progress = self.progress.advance(cleared);
    }

    fn check_game_over(&mut self) -> bool {
        if self.blocked_out {
            return true;
        }
        self.lift_falling();
        let over = self.board.is_topped_out();
        self.put_falling();
        over
    }
}
