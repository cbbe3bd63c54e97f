//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no dependencies, so the engine, the
//! terminal view and the input mapping can all share it.
//!
//! # Board Dimensions
//!
//! The board size is chosen at construction time. The classic terminal layout
//! uses 22 rows by 10 columns:
//!
//! - **Rows**: indexed top to bottom, row 0 is the top edge
//! - **Columns**: indexed left to right
//! - **Spawn origin**: `(0, cols / 2 - 2)`
//!
//! # Leveling
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_LEVEL` | 19 | Highest reachable level |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level |
//!
//! # Gravity Schedule (ticks per row)
//!
//! | Level | Ticks | Level | Ticks |
//! |-------|-------|-------|-------|
//! | 0 | 50 | 10 | 30 |
//! | 1 | 48 | 11 | 28 |
//! | 2 | 46 | 12 | 26 |
//! | 3 | 44 | 13 | 24 |
//! | 4 | 42 | 14 | 22 |
//! | 5 | 40 | 15 | 20 |
//! | 6 | 38 | 16 | 16 |
//! | 7 | 36 | 17 | 12 |
//! | 8 | 34 | 18 | 8 |
//! | 9 | 32 | 19 | 4 |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Cell, Command, PieceKind, Rotation};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.step(1), Rotation::East);
//! assert_eq!(Rotation::North.step(-1), Rotation::West);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert!(Cell::Filled(PieceKind::I).is_filled());
//! ```

/// Default board height used by the terminal frontend
pub const DEFAULT_ROWS: u16 = 22;

/// Default board width used by the terminal frontend
pub const DEFAULT_COLS: u16 = 10;

/// Smallest accepted board height (tallest shape spans 4 rows)
pub const MIN_ROWS: u16 = 4;

/// Smallest accepted board width (widest shape spans 4 columns)
pub const MIN_COLS: u16 = 4;

/// Number of cells in every piece
pub const CELLS_PER_PIECE: usize = 4;

/// Number of piece kinds
pub const NUM_KINDS: usize = 7;

/// Number of orientations per piece kind
pub const NUM_ORIENTATIONS: usize = 4;

/// Number of rows at the top of the board that end the game when filled
pub const DANGER_ROWS: usize = 2;

/// Highest level; further level-ups are capped here
pub const MAX_LEVEL: u32 = 19;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear multipliers indexed by lines cleared in one tick
///
/// Points awarded are `LINE_MULTIPLIERS[cleared] * (level + 1)`.
pub const LINE_MULTIPLIERS: [u32; 5] = [0, 40, 100, 300, 1200];

/// Ticks between gravity descents, indexed by level
pub const GRAVITY_LEVEL: [u32; MAX_LEVEL as usize + 1] = [
    50, 48, 46, 44, 42, 40, 38, 36, 34, 32, //
    30, 28, 26, 24, 22, 20, 16, 12, 8, 4,
];

/// Default frame duration of the terminal loop in milliseconds
pub const DEFAULT_FRAME_MS: u64 = 10;

/// The seven piece kinds
///
/// Frontend colours:
/// - **I**: cyan
/// - **J**: blue
/// - **L**: white
/// - **O**: yellow
/// - **S**: green
/// - **T**: magenta
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in shape table order.
    pub const ALL: [Self; NUM_KINDS] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Index into the shape table.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]. Returns `None` for indices past 6.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Orientation of a piece
///
/// The cycle goes North → East → South → West → North. North (index 0) is
/// the spawn orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    const CYCLE: [Self; NUM_ORIENTATIONS] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Orientation index in `0..4`.
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Advance by `step` quarter turns; positive is clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.step(1), Rotation::North);
    /// assert_eq!(Rotation::East.step(-1), Rotation::North);
    /// assert_eq!(Rotation::North.step(-1), Rotation::West);
    /// ```
    pub fn step(self, step: i8) -> Self {
        let n = NUM_ORIENTATIONS as i32;
        let idx = (self.index() as i32 + step as i32).rem_euclid(n);
        Self::CYCLE[idx as usize]
    }

    pub fn rotate_cw(self) -> Self {
        self.step(1)
    }

    pub fn rotate_ccw(self) -> Self {
        self.step(-1)
    }
}

/// Player commands consumed once per tick
///
/// The input layer maps raw key events to one of these; the engine applies
/// at most one per tick, after gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    /// Shift the falling piece one column left
    MoveLeft,
    /// Shift the falling piece one column right
    MoveRight,
    /// Rotate one quarter turn clockwise, with wall kicks
    RotateCw,
    /// Rotate one quarter turn counter-clockwise, with wall kicks
    RotateCcw,
    /// Drop to the lowest fitting row and lock immediately
    HardDrop,
    /// Swap with the held piece (or stash it when nothing is held)
    Hold,
    /// Gravity only
    #[default]
    None,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use tick_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATECCW"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("softDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "harddrop" => Some(Command::HardDrop),
            "hold" => Some(Command::Hold),
            "none" => Some(Command::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::HardDrop => "hardDrop",
            Command::Hold => "hold",
            Command::None => "none",
        }
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    /// The kind that filled this cell, if any.
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(*kind),
        }
    }
}
