//! TUI Typos (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, tests and
//! benches can use `tui_typos::{core,input,term,types,words}`.

pub use tui_typos_core as core;
pub use tui_typos_input as input;
pub use tui_typos_term as term;
pub use tui_typos_types as types;
pub use tui_typos_words as words;

/// Version banner printed by `-V`, `-h` and on exit.
pub const BANNER: &str = concat!("tui-typos v", env!("CARGO_PKG_VERSION"));
