//! Difficulty progression applied each time a word is retired
//!
//! Pure functions: given the tuning, the current difficulty and whether the
//! retired word was clean, compute the next difficulty.
//!
//! Rules, in order:
//!
//! 1. A clean word (no laser hit) increments the completed-word count.
//! 2. If the count is a multiple of `speed_threshold`, the scroll delay is
//!    multiplied by `delay_decay` and the per-character bonus goes up by one.
//! 3. Otherwise, if the count is a multiple of `laser_move_threshold`, the
//!    laser moves one column right (up to `laser_column_max`).
//!
//! Only one of 2 and 3 applies per word; when both moduli line up the
//! speed-up wins. The check runs on every retirement, clean or not, so a
//! dirty word while the count sits on a multiple triggers the rule again.

use crate::types::GameConfig;

/// Difficulty knobs that change over a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub completed_words: u32,
    /// Seconds between scroll steps
    pub scroll_delay: f64,
    pub bonus_per_char: i64,
    pub laser_column: u16,
}

impl Difficulty {
    /// Difficulty at session start
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            completed_words: 0,
            scroll_delay: config.start_delay,
            bonus_per_char: config.start_bonus,
            laser_column: config.laser_column,
        }
    }
}

/// Which rule fired on a retirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progression {
    /// Delay shrank and bonus grew
    SpeedUp,
    /// Laser moved one column right
    LaserAdvanced,
    /// Laser rule fired but the laser is already at its limit
    LaserAtLimit,
    Unchanged,
}

/// Compute the difficulty after retiring a word.
pub fn progress(config: &GameConfig, current: Difficulty, clean: bool) -> (Difficulty, Progression) {
    let mut next = current;

    if clean {
        next.completed_words += 1;
    }

    if next.completed_words % config.speed_threshold == 0 {
        next.scroll_delay *= config.delay_decay;
        next.bonus_per_char += 1;
        return (next, Progression::SpeedUp);
    }

    if next.completed_words % config.laser_move_threshold == 0 {
        if next.laser_column < config.laser_column_max {
            next.laser_column += 1;
            return (next, Progression::LaserAdvanced);
        }
        return (next, Progression::LaserAtLimit);
    }

    (next, Progression::Unchanged)
}
