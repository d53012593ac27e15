//! Game state module - manages the complete session state
//!
//! This module ties together the word pool, the live word, scoring and
//! difficulty. It handles the three transitions a session goes through:
//!
//! - [`GameState::advance_word`]: scroll step, possibly a laser hit
//! - [`GameState::apply_key`]: a typed character, match or mismatch
//! - [`GameState::retire_if_done`]: word finished, difficulty progression

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::difficulty::{self, Difficulty, Progression};
use crate::snapshot::RenderSnapshot;
use crate::types::{ConfigError, FrameEvents, GameConfig, KeyOutcome};
use crate::word::Word;
use crate::word_source::WordSource;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    words: WordSource,
    rng: Pcg32,
    word: Word,
    score: i64,
    difficulty: Difficulty,
    /// Set once the current word has been hit by the laser.
    missed_this_word: bool,
    /// Feedback since the last frame (consumed by the renderer).
    events: FrameEvents,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(config: GameConfig, words: WordSource, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let word = Word::new(words.pick(&mut rng), config.spawn_column());

        Ok(Self {
            config,
            words,
            rng,
            word,
            score: 0,
            difficulty: Difficulty::initial(&config),
            missed_this_word: false,
            events: FrameEvents::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn bonus_per_char(&self) -> i64 {
        self.difficulty.bonus_per_char
    }

    pub fn scroll_delay(&self) -> f64 {
        self.difficulty.scroll_delay
    }

    pub fn laser_column(&self) -> u16 {
        self.difficulty.laser_column
    }

    pub fn completed_words(&self) -> u32 {
        self.difficulty.completed_words
    }

    pub fn missed_this_word(&self) -> bool {
        self.missed_this_word
    }

    /// Peek at pending feedback without consuming it
    pub fn events(&self) -> FrameEvents {
        self.events
    }

    /// Take pending feedback, clearing it
    pub fn take_events(&mut self) -> FrameEvents {
        self.events.take()
    }

    /// Scroll the word one column left.
    ///
    /// Reaching the laser shoots off the leading character, costs
    /// `bonus_per_char + 1` points and pushes the word back to just right of
    /// the laser. Returns true on a hit.
    pub fn advance_word(&mut self) -> bool {
        let column = self.word.step_left();
        let laser = self.difficulty.laser_column;
        if column > laser {
            return false;
        }

        self.word.pop_front();
        self.score -= self.difficulty.bonus_per_char + 1;
        self.word.set_column(laser + 1);
        self.missed_this_word = true;
        self.events.missed = true;

        log::debug!(
            "laser hit: {}/{} chars gone, score {}",
            self.word.consumed(),
            self.word.original_len(),
            self.score
        );
        true
    }

    /// Interpret one typed character against the word.
    ///
    /// Comparison is exact (case-sensitive). A match earns `bonus_per_char`
    /// and consumes the character; anything else costs `bonus_per_char - 1`.
    pub fn apply_key(&mut self, ch: char) -> KeyOutcome {
        if self.word.first() == Some(ch) {
            self.word.pop_front();
            self.score += self.difficulty.bonus_per_char;
            KeyOutcome::Matched
        } else {
            self.score -= self.difficulty.bonus_per_char - 1;
            self.events.mismatched = true;
            KeyOutcome::Mismatched
        }
    }

    /// If the word is used up, retire it, apply difficulty progression and
    /// spawn the next word at the right edge.
    pub fn retire_if_done(&mut self) -> Option<Progression> {
        if !self.word.is_empty() {
            return None;
        }

        let clean = !self.missed_this_word;
        self.missed_this_word = false;

        self.spawn_word();

        let (next, progression) = difficulty::progress(&self.config, self.difficulty, clean);
        self.difficulty = next;

        log::debug!(
            "word retired (clean: {}), {} ok, {:?}, delay {:.3}s, laser at {}",
            clean,
            next.completed_words,
            progression,
            next.scroll_delay,
            next.laser_column
        );
        Some(progression)
    }

    fn spawn_word(&mut self) {
        let text = self.words.pick(&mut self.rng);
        self.word = Word::new(text, self.config.spawn_column());
    }

    /// Copy the renderable state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        self.word
            .write_visible_into(self.config.window_width, &mut out.word);
        out.word_column = self.word.column();
        out.laser_column = self.difficulty.laser_column;
        out.score = self.score;
        out.scroll_delay = self.difficulty.scroll_delay;
        out.bonus_per_char = self.difficulty.bonus_per_char;
        out.completed_words = self.difficulty.completed_words;
        out.total_words = self.words.len();
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut out = RenderSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    #[cfg(test)]
    pub(crate) fn set_word(&mut self, text: &str, column: u16) {
        self.word = Word::new(text, column);
    }

    #[cfg(test)]
    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}
