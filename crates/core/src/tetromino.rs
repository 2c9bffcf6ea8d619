//! Tetromino module - the active falling piece
//!
//! A tetromino owns four blocks that move and rotate together. Every operation first
//! checks all four target positions against the board and only then commits, so a
//! move or rotation is applied to every block or to none.

use crate::block::Block;
use crate::board::Board;
use crate::pieces::{get_spawn_shape, rotates};
use crate::types::{PieceKind, BOARD_HEIGHT};

/// Outcome of a gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// Every block moved down one row.
    Moved,
    /// The piece is resting on the floor or a locked block and must lock in place.
    Landed,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    /// Pivot first.
    blocks: [Block; 4],
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            blocks: get_spawn_shape(kind).map(|(col, row)| Block::new(col, row, kind)),
        }
    }

    /// Create a tetromino with explicit block positions (pivot first).
    pub fn from_positions(kind: PieceKind, positions: [(i8, i8); 4]) -> Self {
        Self {
            kind,
            blocks: positions.map(|(col, row)| Block::new(col, row, kind)),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    pub fn pivot(&self) -> (i8, i8) {
        self.blocks[0].pos()
    }

    pub fn positions(&self) -> [(i8, i8); 4] {
        self.blocks.map(|b| b.pos())
    }

    /// Shift every block `delta` columns if none of them collides.
    ///
    /// Returns false (and leaves the piece untouched) when any block would leave the
    /// playfield or enter a locked cell.
    pub fn move_horizontal(&mut self, delta: i8, board: &Board) -> bool {
        let blocked = self
            .blocks
            .iter()
            .any(|b| b.horizontal_collide(b.col + delta, board));
        if blocked {
            return false;
        }

        for b in &mut self.blocks {
            b.col += delta;
        }
        true
    }

    /// Whether the piece can fall one more row.
    pub fn can_move_down(&self, board: &Board) -> bool {
        !self
            .blocks
            .iter()
            .any(|b| b.vertical_collide(b.row + 1, board))
    }

    /// Move every block one row down, or report that the piece has landed.
    pub fn move_down(&mut self, board: &Board) -> Descent {
        if !self.can_move_down(board) {
            return Descent::Landed;
        }

        for b in &mut self.blocks {
            b.row += 1;
        }
        Descent::Moved
    }

    /// Rotate a quarter turn about the pivot block.
    ///
    /// The square never rotates. Any rotated block that lands outside the side walls, at
    /// or below the floor, or on a locked cell rejects the whole rotation; there are no
    /// wall kicks. Rows above the top edge are allowed.
    pub fn rotate(&mut self, board: &Board) -> bool {
        if !rotates(self.kind) {
            return false;
        }

        let pivot = self.pivot();
        let rotated = Self::from_positions(self.kind, self.blocks.map(|b| b.rotated_about(pivot)));
        if !rotated.is_valid(board) {
            return false;
        }

        *self = rotated;
        true
    }

    /// Check if all blocks are inside the side walls and floor and off locked cells.
    ///
    /// Rows above the top edge count as free.
    pub fn is_valid(&self, board: &Board) -> bool {
        self.blocks.iter().all(|b| {
            board.contains_column(b.col)
                && b.row < BOARD_HEIGHT as i8
                && !board.is_occupied(b.col, b.row)
        })
    }
}
