//! TUI Blockfall (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package exposes them
//! as `tui_blockfall::{core,input,term,types}` and owns the runtime configuration used by
//! the terminal binary.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
