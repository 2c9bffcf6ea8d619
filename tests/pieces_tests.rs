//! Piece tests - shape table, spawning, movement and rotation against a board

use tui_blockfall::core::pieces::{get_shape, get_spawn_shape, SPAWN_POSITION};
use tui_blockfall::core::{Board, Descent, Tetromino};
use tui_blockfall::types::PieceKind;

// ============== Shape Tests ==============

#[test]
fn test_every_shape_has_pivot_first() {
    for kind in PieceKind::ALL {
        assert_eq!(get_shape(kind)[0], (0, 0), "{kind:?}");
    }
}

#[test]
fn test_spawn_shape_is_offset_by_spawn_position() {
    for kind in PieceKind::ALL {
        let base = get_shape(kind);
        let spawned = get_spawn_shape(kind);
        for (b, s) in base.iter().zip(spawned.iter()) {
            assert_eq!((b.0 + SPAWN_POSITION.0, b.1 + SPAWN_POSITION.1), *s);
        }
    }
}

#[test]
fn test_new_piece_starts_partly_above_board() {
    let piece = Tetromino::new(PieceKind::I);
    assert_eq!(piece.positions(), [(5, -1), (5, -2), (5, -3), (5, 0)]);
    assert!(piece.is_valid(&Board::new()));
}

// ============== Movement Tests ==============

#[test]
fn test_move_until_wall() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::T);

    let mut moves = 0;
    while piece.move_horizontal(-1, &board) {
        moves += 1;
    }
    // T spans columns 4..=6 at spawn.
    assert_eq!(moves, 4);
    assert_eq!(piece.positions().iter().map(|p| p.0).min(), Some(0));

    let mut moves = 0;
    while piece.move_horizontal(1, &board) {
        moves += 1;
    }
    assert_eq!(moves, 7);
    assert_eq!(piece.positions().iter().map(|p| p.0).max(), Some(9));
}

#[test]
fn test_move_blocked_by_locked_cell() {
    let mut board = Board::new();
    let mut piece = Tetromino::from_positions(PieceKind::O, [(5, 10), (5, 9), (6, 10), (6, 9)]);
    board.set(4, 10, Some(PieceKind::Z));

    let before = piece;
    assert!(!piece.move_horizontal(-1, &board));
    assert_eq!(piece, before);
    assert!(piece.move_horizontal(1, &board));
}

#[test]
fn test_drop_lands_on_stack() {
    let mut board = Board::new();
    board.set(5, 19, Some(PieceKind::L));
    let mut piece = Tetromino::new(PieceKind::O);

    let mut steps = 0;
    while piece.move_down(&board) == Descent::Moved {
        steps += 1;
    }
    // Pivot goes from row -1 to row 18.
    assert_eq!(steps, 19);
    assert_eq!(piece.pivot(), (5, 18));
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_return_to_start() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Tetromino::from_positions(kind, get_shape(kind).map(|(x, y)| (x + 4, y + 10)));
        let start = piece;
        for _ in 0..4 {
            piece.rotate(&board);
        }
        assert_eq!(piece, start, "{kind:?}");
    }
}

#[test]
fn test_rotation_is_quarter_turn_about_pivot() {
    let board = Board::new();
    let mut piece = Tetromino::from_positions(PieceKind::L, [(4, 10), (4, 9), (4, 11), (5, 11)]);
    assert!(piece.rotate(&board));
    assert_eq!(piece.positions(), [(4, 10), (5, 10), (3, 10), (3, 11)]);
}

#[test]
fn test_rotation_blocked_by_locked_cell() {
    let mut board = Board::new();
    let mut piece = Tetromino::from_positions(PieceKind::I, [(4, 10), (4, 9), (4, 8), (4, 11)]);
    board.set(3, 10, Some(PieceKind::O));

    let before = piece;
    assert!(!piece.rotate(&board));
    assert_eq!(piece, before);
}
