//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn column**: `BOARD_WIDTH / 2`, one row above the pivot offset
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_RATE` | 60 | Target frames per second of the driver |
//! | `UPDATE_START_SPEED_MS` | 700 | Gravity interval at level 1 |
//! | `MOVE_WAIT_MS` | 500 | Horizontal move debounce |
//! | `ROTATE_WAIT_MS` | 200 | Rotate debounce |
//!
//! Soft drop runs gravity at 1/`SOFT_DROP_MULTIPLIER` (10%) of the current interval and each
//! level up multiplies the interval by `LEVEL_SPEED_FACTOR` (0.75).
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, KeyState, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.as_str(), "T");
//! assert_eq!(PieceKind::from_u8(piece.as_u8()), Some(piece));
//!
//! let keys = KeyState { left: true, ..KeyState::default() };
//! assert!(!keys.down);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Target frame rate of the game loop driver.
pub const FRAME_RATE: u32 = 60;

/// Initial milliseconds between automatic downward moves.
pub const UPDATE_START_SPEED_MS: u32 = 700;

/// Delay before a held horizontal key moves the piece again.
pub const MOVE_WAIT_MS: u32 = 500;

/// Delay before a held rotate key rotates the piece again.
pub const ROTATE_WAIT_MS: u32 = 200;

/// Soft drop speed multiplier (gravity runs 10x faster while held).
pub const SOFT_DROP_MULTIPLIER: f32 = 10.0;

/// Fall speed multiplier applied on every level up.
pub const LEVEL_SPEED_FACTOR: f32 = 0.75;

/// Lines per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Level a fresh game starts at.
pub const START_LEVEL: u32 = 1;

/// Number of upcoming shapes shown in the preview.
pub const PREVIEW_LEN: usize = 3;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **T**: Purple
/// - **O**: Yellow, 2x2 square (never rotates)
/// - **J**: Blue
/// - **L**: Orange
/// - **I**: Cyan, straight bar
/// - **Z**: Green
/// - **S**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    J,
    L,
    I,
    Z,
    S,
}

impl PieceKind {
    /// All kinds in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::I => "I",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
        }
    }

    /// Compact grid encoding used by snapshots (0 is reserved for empty).
    pub fn as_u8(&self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::I => 5,
            PieceKind::Z => 6,
            PieceKind::S => 7,
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::J),
            4 => Some(PieceKind::L),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::Z),
            7 => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Display color as `(r, g, b)`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::T => (0x7b, 0x21, 0x7f),
            PieceKind::O => (0xf1, 0xe6, 0x0d),
            PieceKind::J => (0x20, 0x4b, 0x9b),
            PieceKind::L => (0xf0, 0x7e, 0x13),
            PieceKind::I => (0x6c, 0xc6, 0xd9),
            PieceKind::Z => (0x65, 0xb3, 0x2e),
            PieceKind::S => (0xe5, 0x1b, 0x20),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked block of the given kind
pub type Cell = Option<PieceKind>;

/// Abstract key states polled once per tick.
///
/// Level semantics: a field is `true` for every tick the key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    /// Rotate (up)
    pub rotate: bool,
    /// Soft drop (down)
    pub down: bool,
    pub restart: bool,
}

/// Gravity and debounce timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub start_speed_ms: u32,
    pub move_wait_ms: u32,
    pub rotate_wait_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            start_speed_ms: UPDATE_START_SPEED_MS,
            move_wait_ms: MOVE_WAIT_MS,
            rotate_wait_ms: ROTATE_WAIT_MS,
        }
    }
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Active,
    GameOver,
}

/// Events emitted by the core, drained by the frontend once per tick.
///
/// `ScoreChanged` is the score sink: it is emitted once on reset with
/// `(0, 0, START_LEVEL)` and once after every line-clear pass that removed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Reset,
    PieceSpawned { kind: PieceKind },
    PieceLocked { kind: PieceKind },
    LinesCleared { count: u32 },
    LevelUp { level: u32 },
    ScoreChanged { lines: u32, score: u32, level: u32 },
    GameOver { score: u32, level: u32 },
}
