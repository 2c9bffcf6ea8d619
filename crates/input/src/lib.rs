//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the game's abstract keys and tracks which of them are
//! currently held, producing a [`crate::types::KeyState`] once per frame. Terminals
//! that never report key releases are handled with a timeout.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS, DEFAULT_REPEAT_DELAY_MS};
pub use map::{map_key, should_quit, Key};
