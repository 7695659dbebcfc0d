//! Error types for quotation extraction.
//!
//! Document text never produces an error: unmatched, stray and ambiguous
//! marks are resolved by policy. Errors only report a broken contract from
//! a collaborator (the sentence splitter) or an unreadable configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// A sentence does not start where the previous one ended.
    #[error("sentence {index} starts at {found}, expected {expected}")]
    NonContiguousSentence {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("sentence {index} ends at {end} before its start {start}")]
    InvertedSentence {
        index: usize,
        start: usize,
        end: usize,
    },

    /// The sentences stop short of (or run past) the end of the document.
    #[error("sentence boundaries cover 0..{covered} but the document has {len} characters")]
    IncompleteCoverage { covered: usize, len: usize },

    #[error("invalid quote configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
