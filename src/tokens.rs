//! Pass-through of tokens from an external tokenizer.
//!
//! The engine never tokenizes. When the surrounding pipeline already has
//! tokens, each quotation records which of them it covers.

use crate::quote_span::QuoteSpan;
use std::ops::Range;

/// Set `tokens` on every span in the forest.
///
/// `tokens` are character ranges ordered by start. A token belongs to a
/// quotation when it starts inside it.
pub fn attach_tokens(spans: &mut [QuoteSpan], tokens: &[Range<usize>]) {
    for span in spans.iter_mut() {
        let first = tokens.partition_point(|token| token.start < span.start);
        let last = tokens.partition_point(|token| token.start < span.end);
        span.tokens = Some(first..last);
        attach_tokens(&mut span.children, tokens);
    }
}
