//! The extraction pipeline: classify and match, nest, then map sentences.

use crate::config::QuoteConfig;
use crate::containment::build_tree;
use crate::errors::QuoteResult;
use crate::matcher::match_spans;
use crate::quote_span::QuoteSpan;
use crate::sentence::{annotate_sentences, SentenceBoundaries};
use crate::tokens::attach_tokens;
use std::ops::Range;

/// Extracts quotations from one document at a time.
///
/// The extractor only holds configuration; all working state lives inside a
/// single call, so one extractor can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct QuoteExtractor {
    config: QuoteConfig,
}

impl QuoteExtractor {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Top-level quotations of `text` in document order, each carrying its
    /// nested quotations.
    ///
    /// `sentences` are character ranges from the sentence splitter. They must
    /// be contiguous, ordered, and cover the document; otherwise an error is
    /// returned. Nothing in the text itself can make this fail.
    pub fn extract(&self, text: &str, sentences: &[Range<usize>]) -> QuoteResult<Vec<QuoteSpan>> {
        let chars: Vec<char> = text.chars().collect();
        let sentences = SentenceBoundaries::new(sentences, chars.len())?;
        Ok(self.extract_chars(&chars, &sentences))
    }

    /// Like [`extract`](Self::extract), also recording which of the
    /// caller's `tokens` (character ranges ordered by start) each quotation
    /// covers.
    pub fn extract_with_tokens(
        &self,
        text: &str,
        sentences: &[Range<usize>],
        tokens: &[Range<usize>],
    ) -> QuoteResult<Vec<QuoteSpan>> {
        let mut spans = self.extract(text, sentences)?;
        attach_tokens(&mut spans, tokens);
        Ok(spans)
    }

    /// Extract against already validated sentence boundaries.
    pub fn extract_chars(&self, chars: &[char], sentences: &SentenceBoundaries) -> Vec<QuoteSpan> {
        let mut matched = match_spans(chars, &self.config);
        if let Some(max_length) = self.config.max_length {
            matched.retain(|span| {
                let keep = span.len() <= max_length;
                if !keep {
                    log::debug!(
                        "{:?} quotation {}..{} longer than {} dropped",
                        span.family,
                        span.start,
                        span.end,
                        max_length
                    );
                }
                keep
            });
        }

        let mut spans = build_tree(chars, matched);
        annotate_sentences(&mut spans, sentences);
        spans
    }
}

/// Extract quotations with the default configuration.
///
/// ```
/// let text = "\"Hello,\" he said, \"how are you doing?\"";
/// let quotes = layered_quotes::extract_quotations(text, &[0..text.chars().count()]).unwrap();
///
/// assert_eq!(quotes.len(), 2);
/// assert_eq!(quotes[0].text, "\"Hello,\"");
/// assert_eq!(quotes[1].index, 1);
/// ```
pub fn extract_quotations(text: &str, sentences: &[Range<usize>]) -> QuoteResult<Vec<QuoteSpan>> {
    QuoteExtractor::default().extract(text, sentences)
}
