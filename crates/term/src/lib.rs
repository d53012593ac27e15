//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to the
//! terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the screen layout pure ([`TyposView`]) and the I/O thin ([`TerminalRenderer`])
//! - Redraw only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use tui_typos_core as core;
pub use tui_typos_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Starfield, TyposView, Viewport, N_STARS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
