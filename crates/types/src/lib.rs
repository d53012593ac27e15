//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, input decoding).
//!
//! # Screen Geometry
//!
//! The playfield is a single row of text scrolling right-to-left:
//!
//! - **Width**: 80 columns by default (or the terminal width at start-up)
//! - **Height**: 24 rows by default; the word travels along the middle row
//! - **Laser**: starts at column 5 and creeps right, never past `width - 5`
//!
//! # Difficulty Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_START_DELAY_SECS` | 0.8 | Seconds between scroll steps at start |
//! | `DEFAULT_DELAY_DECAY` | 0.79 | Delay multiplier on each speed-up |
//! | `DEFAULT_SPEED_THRESHOLD` | 5 | Clean words per speed-up |
//! | `DEFAULT_LASER_MOVE_THRESHOLD` | 4 | Clean words per laser step |
//! | `DEFAULT_START_BONUS` | 2 | Points per correct character at start |
//!
//! # Examples
//!
//! ```
//! use tui_typos_types::GameConfig;
//!
//! let config = GameConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.laser_column, 5);
//!
//! let wide = GameConfig::for_window(120, 40);
//! assert_eq!(wide.laser_column_max, 115);
//! ```

use thiserror::Error;

/// Default window width in columns
pub const DEFAULT_WINDOW_WIDTH: u16 = 80;

/// Default window height in rows
pub const DEFAULT_WINDOW_HEIGHT: u16 = 24;

/// Initial laser column
pub const DEFAULT_LASER_COLUMN: u16 = 5;

/// Distance kept between the rightmost laser position and the right edge
pub const LASER_RIGHT_MARGIN: u16 = 5;

/// Seconds between scroll steps when a session starts
pub const DEFAULT_START_DELAY_SECS: f64 = 0.8;

/// Scroll delay multiplier applied on every speed-up
pub const DEFAULT_DELAY_DECAY: f64 = 0.79;

/// Clean completions between speed-ups
pub const DEFAULT_SPEED_THRESHOLD: u32 = 5;

/// Clean completions between laser steps
pub const DEFAULT_LASER_MOVE_THRESHOLD: u32 = 4;

/// Points per correctly typed character when a session starts
pub const DEFAULT_START_BONUS: i64 = 2;

/// Smallest window the game can lay itself out in
pub const MIN_WINDOW_WIDTH: u16 = 20;
pub const MIN_WINDOW_HEIGHT: u16 = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_tuning_defaults() {
        assert_eq!(DEFAULT_WINDOW_WIDTH, 80);
        assert_eq!(DEFAULT_WINDOW_HEIGHT, 24);
        assert_eq!(DEFAULT_LASER_COLUMN, 5);
        assert_eq!(DEFAULT_SPEED_THRESHOLD, 5);
        assert_eq!(DEFAULT_LASER_MOVE_THRESHOLD, 4);
        assert_eq!(DEFAULT_START_BONUS, 2);
        assert!((DEFAULT_START_DELAY_SECS - 0.8).abs() < f64::EPSILON);
        assert!((DEFAULT_DELAY_DECAY - 0.79).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_matches_constants() {
        let c = GameConfig::default();
        assert_eq!(c.window_width, 80);
        assert_eq!(c.window_height, 24);
        assert_eq!(c.laser_column_max, 75);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn for_window_scales_laser_limit() {
        let c = GameConfig::for_window(100, 30);
        assert_eq!(c.window_width, 100);
        assert_eq!(c.window_height, 30);
        assert_eq!(c.laser_column_max, 95);
        assert_eq!(c.spawn_column(), 99);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let base = GameConfig::default();

        let c = GameConfig { window_width: 10, ..base };
        assert_eq!(c.validate(), Err(ConfigError::WindowTooSmall { width: 10, height: 24 }));

        let c = GameConfig { laser_column: 0, ..base };
        assert_eq!(c.validate(), Err(ConfigError::LaserOutOfRange { column: 0, max: 75 }));

        let c = GameConfig { laser_column: 76, ..base };
        assert!(matches!(c.validate(), Err(ConfigError::LaserOutOfRange { .. })));

        let c = GameConfig { laser_column_max: 79, ..base };
        assert!(matches!(c.validate(), Err(ConfigError::LaserPastSpawn { .. })));

        let c = GameConfig { speed_threshold: 0, ..base };
        assert_eq!(c.validate(), Err(ConfigError::ZeroThreshold));

        let c = GameConfig { start_delay: 0.0, ..base };
        assert!(matches!(c.validate(), Err(ConfigError::BadDelay(_))));

        let c = GameConfig { start_delay: f64::NAN, ..base };
        assert!(matches!(c.validate(), Err(ConfigError::BadDelay(_))));

        let c = GameConfig { delay_decay: 1.0, ..base };
        assert!(matches!(c.validate(), Err(ConfigError::BadDecay(_))));
    }

    #[test]
    fn overrides_apply_and_ignore_garbage() {
        let vars = [
            ("TYPOS_START_DELAY", "0.5"),
            ("TYPOS_DELAY_DECAY", "not-a-number"),
            ("TYPOS_SPEED_THRESHOLD", "7"),
            ("TYPOS_LASER_COLUMN", " 9 "),
        ];
        let c = GameConfig::default().with_overrides(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        });

        assert!((c.start_delay - 0.5).abs() < f64::EPSILON);
        assert!((c.delay_decay - DEFAULT_DELAY_DECAY).abs() < f64::EPSILON);
        assert_eq!(c.speed_threshold, 7);
        assert_eq!(c.laser_move_threshold, DEFAULT_LASER_MOVE_THRESHOLD);
        assert_eq!(c.laser_column, 9);
    }

    #[test]
    fn frame_events_take_clears() {
        let mut ev = FrameEvents {
            missed: true,
            mismatched: false,
        };
        assert!(ev.any());
        let taken = ev.take();
        assert!(taken.missed);
        assert_eq!(ev, FrameEvents::default());
        assert!(!ev.any());
    }
}

/// Immutable tuning parameters for one session
///
/// Built once at start-up and handed to the game state; nothing mutates it
/// afterwards. Columns are zero-based terminal columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub window_width: u16,
    pub window_height: u16,
    /// Laser column at session start
    pub laser_column: u16,
    /// The laser never moves right of this column
    pub laser_column_max: u16,
    pub speed_threshold: u32,
    pub laser_move_threshold: u32,
    /// Initial scroll delay in seconds
    pub start_delay: f64,
    /// Multiplier in (0, 1) applied to the delay on each speed-up
    pub delay_decay: f64,
    pub start_bonus: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_window(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

impl GameConfig {
    /// Default tuning laid out for a `width` x `height` terminal.
    pub fn for_window(width: u16, height: u16) -> Self {
        Self {
            window_width: width,
            window_height: height,
            laser_column: DEFAULT_LASER_COLUMN,
            laser_column_max: width.saturating_sub(LASER_RIGHT_MARGIN),
            speed_threshold: DEFAULT_SPEED_THRESHOLD,
            laser_move_threshold: DEFAULT_LASER_MOVE_THRESHOLD,
            start_delay: DEFAULT_START_DELAY_SECS,
            delay_decay: DEFAULT_DELAY_DECAY,
            start_bonus: DEFAULT_START_BONUS,
        }
    }

    /// Column a fresh word starts at (the rightmost one).
    pub fn spawn_column(&self) -> u16 {
        self.window_width.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.laser_column == 0 || self.laser_column > self.laser_column_max {
            return Err(ConfigError::LaserOutOfRange {
                column: self.laser_column,
                max: self.laser_column_max,
            });
        }
        if self.laser_column_max + 1 >= self.spawn_column() {
            return Err(ConfigError::LaserPastSpawn {
                max: self.laser_column_max,
                width: self.window_width,
            });
        }
        if self.speed_threshold == 0 || self.laser_move_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if !self.start_delay.is_finite() || self.start_delay <= 0.0 {
            return Err(ConfigError::BadDelay(self.start_delay));
        }
        if !(self.delay_decay > 0.0 && self.delay_decay < 1.0) {
            return Err(ConfigError::BadDecay(self.delay_decay));
        }
        Ok(())
    }

    /// Apply `TYPOS_*` environment overrides on top of `self`.
    pub fn from_env_over(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup.
    ///
    /// Missing or unparsable values keep the current setting.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        }

        if let Some(v) = parsed(&lookup, "TYPOS_START_DELAY") {
            self.start_delay = v;
        }
        if let Some(v) = parsed(&lookup, "TYPOS_DELAY_DECAY") {
            self.delay_decay = v;
        }
        if let Some(v) = parsed(&lookup, "TYPOS_SPEED_THRESHOLD") {
            self.speed_threshold = v;
        }
        if let Some(v) = parsed(&lookup, "TYPOS_LASER_MOVE_THRESHOLD") {
            self.laser_move_threshold = v;
        }
        if let Some(v) = parsed(&lookup, "TYPOS_LASER_COLUMN") {
            self.laser_column = v;
        }
        self
    }
}

/// Invalid [`GameConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("window {width}x{height} is too small (need at least 20x8)")]
    WindowTooSmall { width: u16, height: u16 },
    #[error("laser column {column} must be between 1 and {max}")]
    LaserOutOfRange { column: u16, max: u16 },
    #[error("laser limit {max} leaves no room for words in a {width} column window")]
    LaserPastSpawn { max: u16, width: u16 },
    #[error("speed and laser thresholds must be non-zero")]
    ZeroThreshold,
    #[error("scroll delay {0} must be a positive number of seconds")]
    BadDelay(f64),
    #[error("delay decay {0} must be strictly between 0 and 1")]
    BadDecay(f64),
}

/// A decoded keystroke as seen by the game
///
/// Every printable key is a candidate match; only the interrupt is special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// A typed character (compared case-sensitively against the word)
    Char(char),
    /// Ctrl-C: end the session
    Interrupt,
}

/// Result of interpreting one typed character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The character was the word's leading character and has been consumed
    Matched,
    /// Wrong character; penalised, word unchanged
    Mismatched,
}

/// Feedback flags for the renderer
///
/// Set by the core while applying a step, consumed with the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FrameEvents {
    /// The word hit the laser (flash + bell)
    pub missed: bool,
    /// A typed character did not match (bell)
    pub mismatched: bool,
}

impl FrameEvents {
    pub fn any(&self) -> bool {
        self.missed || self.mismatched
    }

    /// Return the current flags and reset them.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
