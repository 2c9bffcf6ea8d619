//! A single cell of a piece, positioned in grid space.

use crate::board::Board;
use crate::types::{PieceKind, BOARD_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub col: i8,
    pub row: i8,
    pub kind: PieceKind,
}

impl Block {
    pub fn new(col: i8, row: i8, kind: PieceKind) -> Self {
        Self { col, row, kind }
    }

    pub fn pos(&self) -> (i8, i8) {
        (self.col, self.row)
    }

    /// Would this block hit a wall or a locked cell at column `col` (same row)?
    pub fn horizontal_collide(&self, col: i8, board: &Board) -> bool {
        !board.contains_column(col) || board.is_occupied(col, self.row)
    }

    /// Would this block hit the floor or a locked cell at row `row` (same column)?
    ///
    /// Rows above the top edge never collide.
    pub fn vertical_collide(&self, row: i8, board: &Board) -> bool {
        row >= BOARD_HEIGHT as i8 || (row >= 0 && board.is_occupied(self.col, row))
    }

    /// Position after a 90° rotation about `pivot`.
    ///
    /// Rows grow downwards, so `(x, y) -> (-y, x)` turns the piece clockwise on screen.
    pub fn rotated_about(&self, pivot: (i8, i8)) -> (i8, i8) {
        let (dx, dy) = (self.col - pivot.0, self.row - pivot.1);
        (pivot.0 - dy, pivot.1 + dx)
    }
}
