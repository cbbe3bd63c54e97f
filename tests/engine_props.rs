//! Property-based tests for the engine.
//!
//! Random seeds and command scripts must never break the board invariants.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use tick_tetris::core::{Board, GameState, Tetromino};
use tick_tetris::types::{Cell, Command, PieceKind, Rotation, LINES_PER_LEVEL, MAX_LEVEL};

const COMMANDS: [Command; 7] = [
    Command::MoveLeft,
    Command::MoveRight,
    Command::RotateCw,
    Command::RotateCcw,
    Command::HardDrop,
    Command::Hold,
    Command::None,
];

fn command() -> impl Strategy<Value = Command> {
    (0..COMMANDS.len()).prop_map(|i| COMMANDS[i])
}

fn kind() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// While play continues the falling piece sits on the board, in bounds,
    /// and counters stay within their ranges.
    #[test]
    fn prop_falling_piece_always_on_board(
        seed in any::<u32>(),
        rows in 4u16..30,
        cols in 4u16..16,
        script in prop::collection::vec(command(), 1..400),
    ) {
        let mut state = GameState::new(rows, cols, seed).unwrap();
        let mut last_points = 0;

        for cmd in script {
            let running = state.tick(cmd);
            prop_assert!(state.points() >= last_points);
            last_points = state.points();
            prop_assert!(state.level() <= MAX_LEVEL);
            prop_assert!((1..=LINES_PER_LEVEL).contains(&state.lines_remaining()));

            if !running {
                break;
            }
            let falling = state.falling();
            for (row, col) in falling.cells() {
                prop_assert_eq!(state.get(row, col), Some(Cell::Filled(falling.kind)));
            }
            // The piece fits on the stack beneath it and no full row is left.
            let mut stack = state.board().clone();
            stack.clear(&falling);
            prop_assert!(stack.fits(&falling));
            for row in 0..rows as usize {
                prop_assert!(!stack.is_row_full(row));
            }
        }
    }

    /// Once over, further ticks change nothing.
    #[test]
    fn prop_game_over_is_final(
        seed in any::<u32>(),
        script in prop::collection::vec(command(), 0..20),
    ) {
        let mut state = GameState::new(6, 4, seed).unwrap();
        let mut guard = 0;
        while state.tick(Command::HardDrop) {
            guard += 1;
            prop_assert!(guard < 10_000);
        }
        let frozen = state.snapshot();
        for cmd in script {
            prop_assert!(!state.tick(cmd));
        }
        prop_assert_eq!(state.snapshot(), frozen);
    }

    /// Line clearing removes exactly the full rows and keeps the rest in order.
    #[test]
    fn prop_clear_full_rows_removes_only_full_rows(
        pattern in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 8),
        full_rows in prop::collection::vec(any::<bool>(), 8),
    ) {
        let mut board = Board::new(8, 6);
        let mut expected_rows = Vec::new();
        for (row, (bits, full)) in pattern.iter().zip(&full_rows).enumerate() {
            let bits: Vec<bool> = if *full { vec![true; 6] } else { bits.clone() };
            for (col, &on) in bits.iter().enumerate() {
                if on {
                    board.set(row as i32, col as i32, Cell::Filled(PieceKind::T));
                }
            }
            if !bits.iter().all(|&b| b) {
                expected_rows.push(bits);
            }
        }

        let cleared = board.clear_full_rows() as usize;
        prop_assert_eq!(cleared, 8 - expected_rows.len());

        // Surviving rows keep their order, packed against the floor.
        for (i, bits) in expected_rows.iter().enumerate() {
            let row = (cleared + i) as i32;
            for (col, &on) in bits.iter().enumerate() {
                prop_assert_eq!(board.get(row, col as i32).unwrap().is_filled(), on);
            }
        }
        for row in 0..cleared {
            prop_assert!(!board.is_row_occupied(row));
        }
    }

    /// Four rotations in open space come back to the start.
    #[test]
    fn prop_four_rotations_are_identity(k in kind(), clockwise in any::<bool>()) {
        let board = Board::new(22, 10);
        let start = Tetromino::new(k, 8, 3);
        let mut piece = start;
        for _ in 0..4 {
            piece.rotation = if clockwise {
                piece.rotation.rotate_cw()
            } else {
                piece.rotation.rotate_ccw()
            };
            prop_assert!(board.fits(&piece));
        }
        prop_assert_eq!(piece, start);
        prop_assert_eq!(piece.rotation, Rotation::North);
    }
}
