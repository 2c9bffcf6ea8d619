//! Pieces module - Tetromino shape table
//!
//! Every shape is four (column, row) offsets relative to a pivot at (0, 0). The pivot is
//! always the first offset; pieces rotate around it. Rows grow downwards.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Offset of a single mino relative to the pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets, pivot first
pub type PieceShape = [MinoOffset; 4];

/// Column the pivot offset is placed at.
pub const SPAWN_COLUMN: i8 = (BOARD_WIDTH / 2) as i8;

/// Grid position a shape offset of (0, 0) spawns at.
///
/// New pieces start one row above their offsets so they enter the playfield from the top.
pub const SPAWN_POSITION: (i8, i8) = (SPAWN_COLUMN, -1);

/// Get the mino offsets for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::T => [(0, 0), (-1, -1), (1, -1), (0, -1)],
        PieceKind::O => [(0, 0), (0, -1), (1, 0), (1, -1)],
        PieceKind::J => [(0, 0), (0, -1), (0, 1), (-1, 1)],
        PieceKind::L => [(0, 0), (0, -1), (0, 1), (1, 1)],
        PieceKind::I => [(0, 0), (0, -1), (0, -2), (0, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (0, -1), (-1, -1)],
        PieceKind::S => [(0, 0), (-1, 0), (0, -1), (1, -1)],
    }
}

/// Whether a kind ever changes under rotation.
pub fn rotates(kind: PieceKind) -> bool {
    kind != PieceKind::O
}

/// Absolute spawn cells for a piece kind.
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind).map(|(dx, dy)| (dx + SPAWN_POSITION.0, dy + SPAWN_POSITION.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_pivot_first_and_distinct_cells() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            assert_eq!(shape[0], (0, 0), "{kind:?} pivot");
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(shape[i], shape[j], "{kind:?} duplicates a cell");
                }
            }
        }
    }

    #[test]
    fn spawn_shape_is_shifted_to_center_and_one_row_up() {
        assert_eq!(
            get_spawn_shape(PieceKind::I),
            [(5, -1), (5, -2), (5, -3), (5, 0)]
        );
    }

    #[test]
    fn only_square_is_rotation_invariant() {
        assert!(!rotates(PieceKind::O));
        assert!(PieceKind::ALL
            .iter()
            .filter(|&&k| k != PieceKind::O)
            .all(|&k| rotates(k)));
    }
}
