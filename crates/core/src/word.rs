//! Word module - the live word scrolling toward the laser
//!
//! A word keeps its full character sequence and a head index; typing or a
//! laser hit moves the head forward instead of shifting the buffer.

/// The word currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    chars: Vec<char>,
    head: usize,
    column: u16,
}

impl Word {
    /// Create a word whose leading edge sits at `column`
    pub fn new(text: &str, column: u16) -> Self {
        Self {
            chars: text.chars().collect(),
            head: 0,
            column,
        }
    }

    /// Characters not yet typed (or shot off by the laser)
    pub fn remaining(&self) -> &[char] {
        &self.chars[self.head..]
    }

    pub fn first(&self) -> Option<char> {
        self.remaining().first().copied()
    }

    /// Drop the leading character, returning it.
    pub fn pop_front(&mut self) -> Option<char> {
        let ch = self.first()?;
        self.head += 1;
        Some(ch)
    }

    pub fn is_empty(&self) -> bool {
        self.head >= self.chars.len()
    }

    /// Length of the word as picked
    pub fn original_len(&self) -> usize {
        self.chars.len()
    }

    /// Characters already removed from the front
    pub fn consumed(&self) -> usize {
        self.head
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn set_column(&mut self, column: u16) {
        self.column = column;
    }

    /// Move one column left, returning the new column.
    pub fn step_left(&mut self) -> u16 {
        self.column = self.column.saturating_sub(1);
        self.column
    }

    /// Remaining text as an owned string
    pub fn text(&self) -> String {
        self.remaining().iter().collect()
    }

    /// Write the part of the remaining text that fits between the word's
    /// column and the right edge of a `width`-column window.
    pub fn write_visible_into(&self, width: u16, out: &mut String) {
        out.clear();
        let room = width.saturating_sub(self.column) as usize;
        out.extend(self.remaining().iter().take(room));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word() {
        let w = Word::new("cat", 79);
        assert_eq!(w.remaining(), &['c', 'a', 't']);
        assert_eq!(w.first(), Some('c'));
        assert_eq!(w.original_len(), 3);
        assert_eq!(w.consumed(), 0);
        assert_eq!(w.column(), 79);
        assert!(!w.is_empty());
    }

    #[test]
    fn test_pop_front_until_empty() {
        let mut w = Word::new("ab", 10);
        assert_eq!(w.pop_front(), Some('a'));
        assert_eq!(w.text(), "b");
        assert_eq!(w.pop_front(), Some('b'));
        assert!(w.is_empty());
        assert_eq!(w.pop_front(), None);
        assert_eq!(w.first(), None);
        assert_eq!(w.original_len(), 2);
        assert_eq!(w.consumed(), 2);
    }

    #[test]
    fn test_step_left() {
        let mut w = Word::new("x", 1);
        assert_eq!(w.step_left(), 0);
        assert_eq!(w.step_left(), 0);
    }

    #[test]
    fn test_visible_text_truncates_at_right_edge() {
        let w = Word::new("elephant", 76);
        let mut out = String::new();
        w.write_visible_into(80, &mut out);
        assert_eq!(out, "elep");

        let w = Word::new("cat", 10);
        w.write_visible_into(80, &mut out);
        assert_eq!(out, "cat");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut w = Word::new("über", 20);
        assert_eq!(w.first(), Some('ü'));
        w.pop_front();
        assert_eq!(w.text(), "ber");
    }
}
