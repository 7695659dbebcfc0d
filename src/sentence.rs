//! Mapping quotations onto sentences supplied by an external splitter.

use crate::errors::{QuoteError, QuoteResult};
use crate::quote_span::QuoteSpan;
use std::ops::Range;

/// Validated sentence ranges: half-open, contiguous, ordered, and covering
/// the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceBoundaries {
    ranges: Vec<Range<usize>>,
}

impl SentenceBoundaries {
    /// Check `ranges` against a document of `doc_len` characters.
    pub fn new(ranges: &[Range<usize>], doc_len: usize) -> QuoteResult<Self> {
        let mut expected = 0;
        for (index, range) in ranges.iter().enumerate() {
            if range.start != expected {
                return Err(QuoteError::NonContiguousSentence {
                    index,
                    expected,
                    found: range.start,
                });
            }
            if range.end < range.start {
                return Err(QuoteError::InvertedSentence {
                    index,
                    start: range.start,
                    end: range.end,
                });
            }
            expected = range.end;
        }
        if expected != doc_len {
            return Err(QuoteError::IncompleteCoverage {
                covered: expected,
                len: doc_len,
            });
        }
        Ok(Self {
            ranges: ranges.to_vec(),
        })
    }

    /// The whole document as a single sentence.
    pub fn whole_document(doc_len: usize) -> Self {
        Self {
            ranges: vec![0..doc_len],
        }
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Index of the sentence containing `offset`, by binary search.
    pub fn sentence_of(&self, offset: usize) -> Option<usize> {
        let index = self.ranges.partition_point(|range| range.end <= offset);
        if index < self.ranges.len() {
            Some(index)
        } else {
            None
        }
    }

    fn sentence_or_last(&self, offset: usize) -> usize {
        self.sentence_of(offset)
            .unwrap_or_else(|| self.ranges.len().saturating_sub(1))
    }
}

/// Fill `sentence_begin`/`sentence_end` for every span in the forest.
///
/// The end lookup uses the last character of the span (its closing mark).
/// Sentences fully spanned in between are not listed; callers can recover
/// them from the boundary list.
pub fn annotate_sentences(spans: &mut [QuoteSpan], sentences: &SentenceBoundaries) {
    for span in spans.iter_mut() {
        span.sentence_begin = sentences.sentence_or_last(span.start);
        span.sentence_end = sentences.sentence_or_last(span.end.saturating_sub(1));
        annotate_sentences(&mut span.children, sentences);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_binary_search() {
        let sentences = SentenceBoundaries::new(&[0..5, 5..5, 5..12, 12..20], 20).unwrap();
        assert_eq!(sentences.sentence_of(0), Some(0));
        assert_eq!(sentences.sentence_of(4), Some(0));
        // empty sentences never contain anything
        assert_eq!(sentences.sentence_of(5), Some(2));
        assert_eq!(sentences.sentence_of(19), Some(3));
        assert_eq!(sentences.sentence_of(20), None);
    }

    #[test]
    fn gaps_are_rejected() {
        let err = SentenceBoundaries::new(&[0..5, 6..10], 10).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::NonContiguousSentence {
                index: 1,
                expected: 5,
                found: 6
            }
        ));
    }

    #[test]
    fn unsorted_ranges_are_rejected() {
        let err = SentenceBoundaries::new(&[5..10, 0..5], 10).unwrap_err();
        assert!(matches!(err, QuoteError::NonContiguousSentence { index: 0, .. }));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let inverted = Range { start: 5, end: 3 };
        let err = SentenceBoundaries::new(&[0..5, inverted], 5);
        assert!(matches!(err, Err(QuoteError::InvertedSentence { index: 1, .. })));
    }

    #[test]
    fn coverage_must_reach_document_end() {
        let err = SentenceBoundaries::new(&[0..5], 8).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sentence boundaries cover 0..5 but the document has 8 characters"
        );
        assert!(SentenceBoundaries::new(&[], 0).is_ok());
        assert!(SentenceBoundaries::new(&[], 3).is_err());
    }

    #[test]
    fn spans_report_begin_and_end_sentence() {
        let sentences = SentenceBoundaries::new(&[0..10, 10..20, 20..30], 30).unwrap();
        let mut spans = vec![QuoteSpan {
            start: 5,
            end: 21,
            text: String::new(),
            family: crate::QuoteFamily::StraightDouble,
            index: 0,
            children: Vec::new(),
            sentence_begin: 0,
            sentence_end: 0,
            tokens: None,
        }];
        annotate_sentences(&mut spans, &sentences);
        assert_eq!((spans[0].sentence_begin, spans[0].sentence_end), (0, 2));

        // closing mark is the last character of sentence 1
        spans[0].end = 20;
        annotate_sentences(&mut spans, &sentences);
        assert_eq!(spans[0].sentence_end, 1);
    }
}
