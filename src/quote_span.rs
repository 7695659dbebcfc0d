//! The quotation tree handed back to callers.

use crate::glyph::QuoteFamily;
use serde::Serialize;
use std::ops::Range;

/// One matched quotation and the quotations nested inside it.
///
/// Offsets are character offsets into the original document; `end` is
/// exclusive and includes the closing mark. Children are strictly contained,
/// never overlap each other, and are sorted by `start`. Spans hold no link
/// back to their parent: to find the quotations enclosing an offset, walk
/// down from the roots with [`enclosing_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSpan {
    pub start: usize,
    pub end: usize,
    /// Verbatim document text for `start..end`, marks and line breaks included.
    pub text: String,
    pub family: QuoteFamily,
    /// 0-based position among siblings: document order for top-level
    /// quotations, order within the parent for nested ones.
    pub index: usize,
    pub children: Vec<QuoteSpan>,
    /// Sentence containing the opening mark.
    pub sentence_begin: usize,
    /// Sentence containing the closing mark.
    pub sentence_end: usize,
    /// Indices of the caller-supplied tokens starting inside this quotation.
    pub tokens: Option<Range<usize>>,
}

impl QuoteSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether `other` lies within this span (an equal range counts).
    pub fn contains(&self, other: &QuoteSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn is_disjoint(&self, other: &QuoteSpan) -> bool {
        self.end <= other.start || other.end <= self.start
    }

    /// Nesting depth of the deepest descendant, 0 for a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Every nested quotation, in document (pre-)order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order walk over a forest of quotations.
pub struct Descendants<'a> {
    stack: Vec<&'a QuoteSpan>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a QuoteSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.stack.pop()?;
        self.stack.extend(span.children.iter().rev());
        Some(span)
    }
}

/// All quotations of a document, nested ones included, in document order.
pub fn flatten(roots: &[QuoteSpan]) -> Vec<&QuoteSpan> {
    Descendants {
        stack: roots.iter().rev().collect(),
    }
    .collect()
}

/// The chain of quotations containing `offset`, outermost first.
pub fn enclosing_path(roots: &[QuoteSpan], offset: usize) -> Vec<&QuoteSpan> {
    let mut path = Vec::new();
    let mut level = roots;
    while let Some(span) = level.iter().find(|span| span.contains_offset(offset)) {
        path.push(span);
        level = &span.children;
    }
    path
}
