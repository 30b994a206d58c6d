//! Greedy longest-match segmentation of Chinese text
//!
//! Text is split into tokens by looking up windows of up to four characters
//! in a vocabulary dictionary, longest first. A priority set of names is
//! consulted ahead of the vocabulary so proper nouns missing from the
//! dictionary still come out as single tokens. Anything left over becomes a
//! one-character token without a word id, and consecutive unknown characters
//! are gathered into unmatched runs for reporting.
//!
//! # Example
//!
//! ```rust
//! use hanzitok_core::{DictionarySource, PrioritySet, Segmenter, StoryDocument};
//!
//! let source = DictionarySource::from_json_str(
//!     r#"{ "w1": { "hanzi": "你好" }, "w2": { "hanzi": "我" } }"#,
//! )
//! .unwrap();
//! let segmenter = Segmenter::new(source.to_vocabulary(), PrioritySet::parse("王小明"));
//!
//! let result = segmenter.segment("王小明：你好吗？");
//! assert_eq!(result.text(), "王小明：你好吗？");
//! assert_eq!(result.unmatched_runs, vec!["吗"]);
//!
//! let json = StoryDocument::new(result.tokens).to_json().unwrap();
//! assert!(json.contains(r#"{"id":"w1","text":"你好"}"#));
//! ```

pub mod accumulator;
pub mod classifier;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod priority;
pub mod segmenter;
pub mod token;
pub mod vocabulary;

pub use accumulator::UnmatchedRuns;
pub use classifier::{CharacterClassifier, PunctuationTable, DEFAULT_SEPARATORS};
pub use diagnostics::{
    format_unmatched, Diagnostic, LogReporter, RecordingReporter, Reporter, Severity,
};
pub use document::{StoryDocument, StoryMetadata, DEFAULT_DIFFICULTY};
pub use error::{SegmentError, VocabularyError};
pub use priority::PrioritySet;
pub use segmenter::{
    Segmentation, SegmentationStats, Segmenter, SegmenterBuilder, SegmenterConfig,
    DEFAULT_MAX_WINDOW,
};
pub use token::Token;
pub use vocabulary::{DictionaryEntry, DictionarySource, Vocabulary};
