//! Board module - the persistent occupancy grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds a locked block.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the top edge (negative y) have no storage and are never occupied.

use arrayvec::ArrayVec;

use crate::block::Block;
use crate::pieces::{get_shape, SPAWN_COLUMN};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear pass (at most every row).
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a column index lies inside the playfield.
    pub fn contains_column(&self, x: i8) -> bool {
        (0..BOARD_WIDTH as i8).contains(&x)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted top to bottom).
    ///
    /// All full rows are removed in one pass. Every surviving row moves down by the number
    /// of cleared rows below it, so rows under the lowest cleared row keep their place.
    /// Uses a two-pointer compaction with zero allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Write blocks into the grid at their current positions.
    ///
    /// Blocks above the top edge have no grid address and are dropped.
    /// Returns the number of blocks written.
    pub fn lock_blocks(&mut self, blocks: &[Block]) -> usize {
        blocks
            .iter()
            .filter(|b| self.set(b.col, b.row, Some(b.kind)))
            .count()
    }

    /// Check whether a piece of `kind` would spawn into occupied cells (game over condition).
    ///
    /// Each shape offset is placed at column `offset.x + BOARD_WIDTH / 2`, row `offset.y`;
    /// offsets with a negative row are ignored.
    pub fn is_spawn_blocked(&self, kind: PieceKind) -> bool {
        get_shape(kind)
            .iter()
            .any(|&(dx, dy)| dy >= 0 && self.is_occupied(dx + SPAWN_COLUMN, dy))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write the grid as compact kind codes (0 = empty).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * width + x].map_or(0, |k| k.as_u8());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill every cell of a row, optionally leaving one column open.
    pub fn fill_row(&mut self, y: i8, kind: PieceKind, gap: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != gap {
                self.set(x, y, Some(kind));
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
        assert_eq!(Board::index(3, -1), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_clear_separated_rows_shifts_by_rows_below() {
        let mut board = Board::new();
        board.fill_row(19, PieceKind::I, None);
        board.fill_row(17, PieceKind::I, None);
        board.set(4, 18, Some(PieceKind::S)); // between the two cleared rows
        board.set(2, 10, Some(PieceKind::Z)); // above both

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[17, 19]);

        assert_eq!(board.get(4, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(2, 12), Some(Some(PieceKind::Z)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_lock_blocks_drops_cells_above_top() {
        let mut board = Board::new();
        let blocks = [
            Block::new(5, 0, PieceKind::I),
            Block::new(5, -1, PieceKind::I),
            Block::new(5, -2, PieceKind::I),
            Block::new(5, 1, PieceKind::I),
        ];
        assert_eq!(board.lock_blocks(&blocks), 2);
        assert!(board.is_occupied(5, 0));
        assert!(board.is_occupied(5, 1));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_more_than_four_rows_can_clear() {
        let mut board = Board::new();
        for y in 12..20 {
            board.fill_row(y, PieceKind::O, None);
        }
        assert_eq!(board.clear_full_rows().len(), 8);
        assert_eq!(board.filled_count(), 0);
    }
}
