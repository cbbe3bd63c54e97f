//! Pieces module - shape table and the piece value type
//!
//! Every kind has four orientations, each given as four (row, col) offsets
//! from the piece origin at the upper left of its bounding box.
//! All offsets are non-negative.

use crate::types::{PieceKind, Rotation, CELLS_PER_PIECE, NUM_KINDS, NUM_ORIENTATIONS};

/// Offset of a single mino relative to piece origin, as (row, col)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; CELLS_PER_PIECE];

type ShapeTable = [[PieceShape; NUM_ORIENTATIONS]; NUM_KINDS];

/// Shape table indexed by `[kind][rotation]`
const SHAPES: ShapeTable = [
    // I
    [
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(3, 0), (3, 1), (3, 2), (3, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
    ],
    // J
    [
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 0), (2, 1)],
    ],
    // L
    [
        [(0, 2), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (1, 2), (2, 0)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
    ],
    // O
    [
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
    ],
    // S
    [
        [(0, 1), (0, 2), (1, 0), (1, 1)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 1), (1, 2), (2, 0), (2, 1)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(0, 1), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 1)],
        [(0, 1), (1, 0), (1, 1), (2, 1)],
    ],
    // Z
    [
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 2), (1, 1), (1, 2), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(0, 1), (1, 0), (1, 1), (2, 0)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Spawn origin for a board `cols` wide: top row, horizontally centred.
pub fn spawn_origin(cols: u16) -> (i32, i32) {
    (0, cols as i32 / 2 - 2)
}

/// A piece: kind, orientation and origin
///
/// Used for the falling, next and held slots alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i32,
    pub col: i32,
}

impl Tetromino {
    /// Create a new tetromino in spawn orientation at the given origin
    pub fn new(kind: PieceKind, row: i32, col: i32) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row,
            col,
        }
    }

    /// Create a new tetromino at the spawn origin of a board `cols` wide
    pub fn spawn(kind: PieceKind, cols: u16) -> Self {
        let (row, col) = spawn_origin(cols);
        Self::new(kind, row, col)
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute (row, col) of each occupied cell
    pub fn cells(&self) -> [(i32, i32); CELLS_PER_PIECE] {
        self.shape()
            .map(|(dr, dc)| (self.row + dr as i32, self.col + dc as i32))
    }

    /// Row of the highest occupied cell
    pub fn top_row(&self) -> i32 {
        self.cells()
            .iter()
            .map(|&(r, _)| r)
            .min()
            .unwrap_or(self.row)
    }
}
