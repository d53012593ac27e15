//! Word source - the immutable pool words are drawn from
//!
//! Draws are uniform and independent (with replacement). The RNG is supplied
//! by the caller so a seeded generator replays the same sequence.

use rand::Rng;
use thiserror::Error;

/// Returned when a word source would have nothing to pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the word list is empty")]
pub struct EmptyWordList;

/// Ordered, non-empty list of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Build a source, dropping empty strings.
    pub fn new(words: Vec<String>) -> Result<Self, EmptyWordList> {
        let words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        if words.is_empty() {
            return Err(EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Convenience constructor for static lists
    pub fn from_strs(words: &[&str]) -> Result<Self, EmptyWordList> {
        Self::new(words.iter().map(|w| w.to_string()).collect())
    }

    /// Number of words (including duplicates)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick a word uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let i = rng.random_range(0..self.words.len());
        &self.words[i]
    }
}
