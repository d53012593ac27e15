//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::KeyInput`] and provides the
//! terminal-backed [`tui_typos_core::KeySource`] used by the game loop.

pub mod keys;
pub mod map;

pub use tui_typos_types as types;

pub use keys::TerminalKeys;
pub use map::{map_key_event, should_quit};
