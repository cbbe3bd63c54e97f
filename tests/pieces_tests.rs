//! Pieces tests - shape table and piece geometry

use tick_tetris::core::pieces::{get_shape, spawn_origin};
use tick_tetris::core::Tetromino;
use tick_tetris::types::{PieceKind, Rotation};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::I, Rotation::North),
        [(1, 0), (1, 1), (1, 2), (1, 3)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::East),
        [(0, 2), (1, 2), (2, 2), (3, 2)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::South),
        [(3, 0), (3, 1), (3, 2), (3, 3)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::West),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::T, Rotation::North),
        [(0, 1), (1, 0), (1, 1), (1, 2)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::South),
        [(1, 0), (1, 1), (1, 2), (2, 1)]
    );
}

#[test]
fn test_shapes_fit_in_four_by_four_box() {
    for kind in PieceKind::ALL {
        for rotation in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            for (r, c) in get_shape(kind, rotation) {
                assert!((0..4).contains(&r) && (0..4).contains(&c), "{kind:?} {rotation:?}");
            }
        }
    }
}

#[test]
fn test_s_and_z_are_mirrors() {
    // Mirroring S North across the box's vertical centre (col -> 2 - col) gives Z North.
    let mut mirrored: Vec<_> = get_shape(PieceKind::S, Rotation::North)
        .iter()
        .map(|&(r, c)| (r, 2 - c))
        .collect();
    mirrored.sort();
    let mut z: Vec<_> = get_shape(PieceKind::Z, Rotation::North).to_vec();
    z.sort();
    assert_eq!(mirrored, z);
}

// ============== Rotation Index Tests ==============

#[test]
fn test_rotation_cycle() {
    let mut r = Rotation::North;
    for expected in [
        Rotation::East,
        Rotation::South,
        Rotation::West,
        Rotation::North,
    ] {
        r = r.rotate_cw();
        assert_eq!(r, expected);
    }
    assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    assert_eq!(Rotation::West.step(-1), Rotation::South);
    assert_eq!(Rotation::East.step(-5), Rotation::North);
}

// ============== Tetromino Tests ==============

#[test]
fn test_spawn_position_depends_on_width() {
    assert_eq!(spawn_origin(10), (0, 3));
    assert_eq!(spawn_origin(20), (0, 8));

    let piece = Tetromino::spawn(PieceKind::J, 20);
    assert_eq!((piece.row, piece.col), (0, 8));
    assert_eq!(piece.rotation, Rotation::North);
}

#[test]
fn test_cells_follow_rotation() {
    let mut piece = Tetromino::new(PieceKind::J, 2, 2);
    assert_eq!(piece.cells(), [(2, 2), (3, 2), (3, 3), (3, 4)]);

    piece.rotation = Rotation::West;
    assert_eq!(piece.cells(), [(2, 3), (3, 3), (4, 2), (4, 3)]);
    assert_eq!(piece.top_row(), 2);
}
