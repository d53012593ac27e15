//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and the frame loop.
//! It has **no dependencies** on the terminal, the file system or the process
//! environment, making it:
//!
//! - **Deterministic**: Same seed and same key timings produce the same session
//! - **Testable**: The loop runs against a hand-driven clock and scripted keys
//! - **Portable**: Any front end can implement [`KeySource`] and [`FrameSink`]
//!
//! # Module Structure
//!
//! - [`word`]: The live word, consumed from the front by typing or the laser
//! - [`word_source`]: The immutable word pool and uniform random picks
//! - [`game_state`]: Score, current word, laser and difficulty
//! - [`difficulty`]: Progression applied when a word is retired
//! - [`timing`]: Clocks and the scroll deadline
//! - [`snapshot`]: Plain data handed to the renderer each frame
//! - [`session`]: The render / wait / apply loop
//!
//! # Game Rules
//!
//! - A word spawns at the right edge and moves one column left every
//!   `scroll_delay` seconds
//! - Typing the word's leading character consumes it for `bonus_per_char` points;
//!   any other character costs `bonus_per_char - 1`
//! - A word reaching the laser loses its leading character, costs
//!   `bonus_per_char + 1` and is pushed just past the laser
//! - Finished words speed the game up every 5 clean words and move the laser
//!   right every 4 (speed-up wins when both apply)
//!
//! # Example
//!
//! ```
//! use tui_typos_core::{GameState, WordSource};
//! use tui_typos_types::{GameConfig, KeyOutcome};
//!
//! let words = WordSource::from_strs(&["cat"]).unwrap();
//! let mut game = GameState::new(GameConfig::default(), words, 12345).unwrap();
//!
//! assert_eq!(game.apply_key('c'), KeyOutcome::Matched);
//! assert_eq!(game.score(), 2);
//! assert_eq!(game.apply_key('x'), KeyOutcome::Mismatched);
//! assert_eq!(game.score(), 1);
//! ```

pub mod difficulty;
pub mod game_state;
pub mod session;
pub mod snapshot;
pub mod timing;
pub mod word;
pub mod word_source;

pub use tui_typos_types as types;

// Re-export commonly used types for convenience
pub use difficulty::{progress, Difficulty, Progression};
pub use game_state::GameState;
pub use session::{FrameSink, KeySource, Session, SessionEnd, Step};
pub use snapshot::RenderSnapshot;
pub use timing::{Clock, ManualClock, MonotonicClock, ScrollTimer};
pub use word::Word;
pub use word_source::{EmptyWordList, WordSource};
