//! Greedy longest-match segmentation
//!
//! The scan walks the text once, left to right. At each position it tries
//! windows from `max_window` chars down to one; at every window length the
//! priority set is consulted before the vocabulary. The first hit is taken
//! and the scan never revisits the position. When nothing matches, the single
//! character becomes an id-less token, and non-punctuation characters also
//! extend the current unmatched run.

use crate::accumulator::UnmatchedRuns;
use crate::classifier::{CharacterClassifier, PunctuationTable};
use crate::diagnostics::{LogReporter, Reporter};
use crate::error::SegmentError;
use crate::priority::PrioritySet;
use crate::token::Token;
use crate::vocabulary::Vocabulary;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default longest window tried at each position, in chars
pub const DEFAULT_MAX_WINDOW: usize = 4;

/// Segmenter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Longest window tried at each position, in chars
    pub max_window: usize,
    /// Word id attached to priority-name tokens
    pub priority_match_id: Option<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_window: DEFAULT_MAX_WINDOW,
            priority_match_id: None,
        }
    }
}

impl SegmenterConfig {
    fn validate(&self) -> Result<(), SegmentError> {
        if self.max_window == 0 {
            return Err(SegmentError::InvalidConfig(
                "max_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Counts gathered during one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentationStats {
    /// Characters scanned
    pub chars: usize,
    /// Tokens matched from the vocabulary
    pub vocabulary_matches: usize,
    /// Tokens matched from the priority set
    pub priority_matches: usize,
    /// Punctuation and whitespace tokens
    pub punctuation: usize,
    /// Unknown single-character tokens
    pub unknown: usize,
}

/// Result of segmenting one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Tokens covering the whole input in order
    pub tokens: Vec<Token>,
    /// Unmatched runs in encounter order
    pub unmatched_runs: Vec<String>,
    /// Scan counters
    pub stats: SegmentationStats,
}

impl Segmentation {
    /// Concatenated token texts; equals the segmented input
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// True when every non-punctuation character was matched
    pub fn is_fully_matched(&self) -> bool {
        self.unmatched_runs.is_empty()
    }

    /// Take the tokens, dropping runs and stats
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Segmentation engine over an immutable vocabulary and priority set
#[derive(Debug, Clone)]
pub struct Segmenter<C = PunctuationTable> {
    vocabulary: Vocabulary,
    priority: PrioritySet,
    classifier: C,
    config: SegmenterConfig,
}

impl Segmenter<PunctuationTable> {
    /// Create a segmenter with the default punctuation table and settings
    pub fn new(vocabulary: Vocabulary, priority: PrioritySet) -> Self {
        Self {
            vocabulary,
            priority,
            classifier: PunctuationTable::default(),
            config: SegmenterConfig::default(),
        }
    }

    /// Create a builder
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }
}

impl<C: CharacterClassifier> Segmenter<C> {
    /// Vocabulary in use
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Priority set in use
    pub fn priority(&self) -> &PrioritySet {
        &self.priority
    }

    /// Settings in use
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment text, reporting diagnostics through the `log` facade
    pub fn segment(&self, text: &str) -> Segmentation {
        self.segment_with(text, &mut LogReporter)
    }

    /// Segment text, reporting diagnostics to `reporter`
    pub fn segment_with(&self, text: &str, reporter: &mut dyn Reporter) -> Segmentation {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let n = chars.len();
        let byte_at = |pos: usize| chars.get(pos).map_or(text.len(), |&(offset, _)| offset);

        let mut tokens = Vec::with_capacity(n);
        let mut runs = UnmatchedRuns::new();
        let mut stats = SegmentationStats {
            chars: n,
            ..SegmentationStats::default()
        };

        let mut pos = 0;
        'scan: while pos < n {
            let start = byte_at(pos);

            // Windows that would run past the end are skipped
            let widest = self.config.max_window.min(n - pos);
            for len in (1..=widest).rev() {
                let chunk = &text[start..byte_at(pos + len)];

                if self.priority.contains(chunk) {
                    reporter.priority_match(chunk);
                    runs.flush();
                    tokens.push(Token {
                        id: self.config.priority_match_id.clone(),
                        text: chunk.to_string(),
                    });
                    stats.priority_matches += 1;
                    pos += len;
                    continue 'scan;
                }

                if let Some(id) = self.vocabulary.get(chunk) {
                    runs.flush();
                    tokens.push(Token::known(id, chunk));
                    stats.vocabulary_matches += 1;
                    pos += len;
                    continue 'scan;
                }
            }

            let ch = chars[pos].1;
            if self.classifier.is_separator(ch) {
                runs.flush();
                stats.punctuation += 1;
            } else {
                log::trace!("Unknown character '{ch}' at {pos}");
                runs.append(ch);
                stats.unknown += 1;
            }
            tokens.push(Token::unknown(ch));
            pos += 1;
        }

        let unmatched_runs = runs.finalize();
        if !unmatched_runs.is_empty() {
            reporter.unmatched_runs(&unmatched_runs);
        }

        log::debug!(
            "Segmented {} chars into {} tokens ({} unmatched runs)",
            n,
            tokens.len(),
            unmatched_runs.len()
        );

        Segmentation {
            tokens,
            unmatched_runs,
            stats,
        }
    }

    /// Segment independent documents, each with its own accumulator
    #[cfg(feature = "parallel")]
    pub fn segment_batch<S>(&self, texts: &[S]) -> Vec<Segmentation>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.segment(text.as_ref()))
            .collect()
    }

    /// Segment independent documents, each with its own accumulator
    #[cfg(not(feature = "parallel"))]
    pub fn segment_batch<S>(&self, texts: &[S]) -> Vec<Segmentation>
    where
        S: AsRef<str>,
    {
        texts
            .iter()
            .map(|text| self.segment(text.as_ref()))
            .collect()
    }
}

/// Builder for [`Segmenter`]
#[derive(Debug, Clone, Default)]
pub struct SegmenterBuilder<C = PunctuationTable> {
    vocabulary: Vocabulary,
    priority: PrioritySet,
    classifier: C,
    config: SegmenterConfig,
}

impl<C: CharacterClassifier> SegmenterBuilder<C> {
    /// Set the vocabulary
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Set the priority names
    pub fn priority_names(mut self, priority: PrioritySet) -> Self {
        self.priority = priority;
        self
    }

    /// Set the longest window tried at each position
    pub fn max_window(mut self, max_window: usize) -> Self {
        self.config.max_window = max_window;
        self
    }

    /// Set the word id attached to priority-name tokens
    pub fn priority_match_id(mut self, id: Option<String>) -> Self {
        self.config.priority_match_id = id;
        self
    }

    /// Replace all settings
    pub fn config(mut self, config: SegmenterConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different punctuation classifier
    pub fn classifier<D: CharacterClassifier>(self, classifier: D) -> SegmenterBuilder<D> {
        SegmenterBuilder {
            vocabulary: self.vocabulary,
            priority: self.priority,
            classifier,
            config: self.config,
        }
    }

    /// Build the segmenter
    pub fn build(self) -> Result<Segmenter<C>, SegmentError> {
        self.config.validate()?;

        Ok(Segmenter {
            vocabulary: self.vocabulary,
            priority: self.priority,
            classifier: self.classifier,
            config: self.config,
        })
    }
}
