//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on the terminal or the wall clock:
//!
//! - **Deterministic**: Same seed and the same timestamps produce identical games
//! - **Testable**: Time is passed in, so tests step it explicitly
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, row compaction on line clears
//! - [`block`]: A single mino and its collision checks
//! - [`tetromino`]: Four blocks moved and rotated as a unit
//! - [`pieces`]: Shape offsets and the spawn position
//! - [`timer`]: Countdown/interval timers driven by injected time
//! - [`game_state`]: Input, gravity, locking, scoring and the game-over lifecycle
//! - [`rng`]: Random upcoming-shape queue
//! - [`scoring`]: Line points, leveling and fall speed
//! - [`snapshot`]: Copy of the state handed to renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at column 5, one row above the visible top, and may hang above it
//! - Rotation is a plain 90 degree turn about the first block, no wall kicks
//! - A piece that cannot fall locks immediately; full rows are cleared before each spawn
//! - Game over when any visible spawn cell is already occupied
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::KeyState;
//!
//! let mut game = GameState::new(12345);
//! let start = game.active().unwrap().pivot();
//!
//! // Gravity fires once 700ms have passed.
//! game.tick(700, KeyState::default());
//! assert_eq!(game.active().unwrap().pivot(), (start.0, start.1 + 1));
//!
//! let keys = KeyState { left: true, ..KeyState::default() };
//! let snap = game.run(716, keys);
//! assert_eq!(snap.active.unwrap().cells[0].0, start.0 - 1);
//! ```

pub mod block;
pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use board::Board;
pub use game_state::{repeat_shape, GameState};
pub use pieces::{get_shape, get_spawn_shape};
pub use rng::{PreviewQueue, ShapeSource, SimpleRng};
pub use scoring::calculate_line_score;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::{Descent, Tetromino};
pub use timer::Timer;
