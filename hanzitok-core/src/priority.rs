//! Priority names matched ahead of the vocabulary
//!
//! Character names and other proper nouns are usually missing from a
//! learner's dictionary. Listing them here makes the segmenter emit them as
//! single tokens instead of a run of unknown characters.

use std::collections::HashSet;

/// Set of surface forms checked before the vocabulary at every window length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrioritySet {
    names: HashSet<String>,
}

impl PrioritySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as `王小明,李华`.
    ///
    /// Names are trimmed and empty items dropped, so an empty list yields an
    /// empty set.
    pub fn parse(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    /// Build from an iterator of names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Check if a surface form is a priority name
    #[inline]
    pub fn contains(&self, surface: &str) -> bool {
        self.names.contains(surface)
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names longer than `max_window` chars, sorted; they can never match
    pub fn longer_than(&self, max_window: usize) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .iter()
            .filter(|name| name.chars().count() > max_window)
            .collect();
        names.sort_unstable();
        names
    }

    /// Iterate over the names in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
