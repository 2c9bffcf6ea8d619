use crate::tetromino::Tetromino;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// (column, row) of each block, pivot first. Rows may be negative while spawning.
    pub cells: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind(),
            cells: value.positions(),
        }
    }
}

/// Render-friendly copy of everything a frontend needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells, `board[row][col]`, 0 = empty, otherwise [`PieceKind::as_u8`].
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next_queue: [Option<PieceKind>; PREVIEW_LEN],
    pub game_over: bool,
    pub soft_drop: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Locked cells as (column, row, kind).
    pub fn locked_cells(&self) -> impl Iterator<Item = (u8, u8, PieceKind)> + '_ {
        self.board.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, &v)| {
                PieceKind::from_u8(v).map(|kind| (x as u8, y as u8, kind))
            })
        })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next_queue: [None; PREVIEW_LEN],
            game_over: false,
            soft_drop: false,
            score: 0,
            level: 0,
            lines: 0,
        }
    }
}
