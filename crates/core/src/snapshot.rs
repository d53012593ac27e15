/// Everything a renderer needs to draw one frame
///
/// `word` already has the off-screen tail cut off.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderSnapshot {
    pub word: String,
    pub word_column: u16,
    pub laser_column: u16,
    pub score: i64,
    pub scroll_delay: f64,
    pub bonus_per_char: i64,
    pub completed_words: u32,
    /// Size of the word pool
    pub total_words: usize,
}

impl RenderSnapshot {
    /// The status line shown on the bottom row.
    pub fn status_line(&self) -> String {
        format!(
            "Words ok: {}, scroll delay: {:.2}, points: {}, # words: {}",
            self.completed_words, self.scroll_delay, self.score, self.total_words
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_format() {
        let snap = RenderSnapshot {
            word: "cat".into(),
            word_column: 40,
            laser_column: 5,
            score: -3,
            scroll_delay: 0.632,
            bonus_per_char: 3,
            completed_words: 5,
            total_words: 1234,
        };
        assert_eq!(
            snap.status_line(),
            "Words ok: 5, scroll delay: 0.63, points: -3, # words: 1234"
        );
    }
}
