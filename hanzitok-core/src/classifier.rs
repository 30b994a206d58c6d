//! Punctuation and whitespace detection with O(1) lookup
//!
//! Characters in the separator class never join an unmatched run: they
//! become standalone tokens and close whatever run is open.

use std::collections::HashSet;

/// Whitespace and CJK punctuation recognised by default.
///
/// ASCII whitespace: space, tab, newline, carriage return, form feed and
/// vertical tab. Full-width punctuation: ，。？！、：；《》【】（）“”
pub const DEFAULT_SEPARATORS: &str = " \t\n\r\x0c\x0b，。？！、：；《》【】（）“”";

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Check if character is punctuation or whitespace
    fn is_separator(&self, ch: char) -> bool;
}

/// Fast separator lookup table
#[derive(Debug, Clone)]
pub struct PunctuationTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII separators
    non_ascii: HashSet<char>,
}

impl PunctuationTable {
    /// Create from a list of separator characters
    pub fn new(separators: impl IntoIterator<Item = char>) -> Self {
        let mut table = Self {
            ascii_table: [false; 128],
            non_ascii: HashSet::new(),
        };
        table.extend(separators);
        table
    }

    /// Default table extended with additional separators
    pub fn with_extra(extra: impl IntoIterator<Item = char>) -> Self {
        let mut table = Self::default();
        table.extend(extra);
        table
    }

    fn extend(&mut self, separators: impl IntoIterator<Item = char>) {
        for ch in separators {
            if ch.is_ascii() {
                self.ascii_table[ch as usize] = true;
            } else {
                self.non_ascii.insert(ch);
            }
        }
    }
}

impl Default for PunctuationTable {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS.chars())
    }
}

impl CharacterClassifier for PunctuationTable {
    #[inline]
    fn is_separator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}
