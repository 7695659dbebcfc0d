//! Pairing openers with closers.
//!
//! Each family owns its own stack of pending openers; a closer only ever
//! pops from the stack of its own family. Anything that cannot be paired
//! (a closer with nothing open, an opener still pending at the end of the
//! document) is dropped without producing a span.

use crate::classifier::{Classifier, Occurrence, OpenQuotes, Role};
use crate::config::QuoteConfig;
use crate::glyph::QuoteFamily;
use std::collections::BTreeMap;

/// A matched quotation before nesting is resolved. `end` is exclusive and
/// includes the closing glyph(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpan {
    pub start: usize,
    pub end: usize,
    pub family: QuoteFamily,
}

impl RawSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opener {
    offset: usize,
    len: usize,
}

/// Per-family opener stacks plus the spans matched so far.
#[derive(Debug, Default)]
pub struct SpanMatcher {
    stacks: BTreeMap<QuoteFamily, Vec<Opener>>,
    spans: Vec<RawSpan>,
}

impl OpenQuotes for SpanMatcher {
    fn is_open(&self, family: QuoteFamily) -> bool {
        self.stacks.get(&family).map_or(false, |stack| !stack.is_empty())
    }

    fn pending_latex_len(&self) -> usize {
        [QuoteFamily::LatexSingle, QuoteFamily::LatexDouble]
            .iter()
            .filter_map(|family| self.stacks.get(family))
            .flatten()
            .map(|opener| opener.len)
            .sum()
    }

    fn innermost_latex_len(&self) -> Option<usize> {
        let family = self.nearest_latex()?;
        self.stacks.get(&family)?.last().map(|opener| opener.len)
    }
}

impl SpanMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, occurrence: Occurrence) {
        match occurrence.role {
            Role::Open => self.open(occurrence),
            Role::Close if occurrence.family.is_latex() => self.close_latex(occurrence),
            Role::Close => self.close(occurrence),
            Role::Literal => {}
        }
    }

    /// Spans matched so far, in closing order.
    pub fn spans(&self) -> &[RawSpan] {
        &self.spans
    }

    /// Discard every unclosed opener and return the matched spans.
    pub fn finish(self) -> Vec<RawSpan> {
        for (family, stack) in self.stacks.iter() {
            for opener in stack {
                log::debug!("unclosed {:?} opener at {} dropped", family, opener.offset);
            }
        }
        self.spans
    }

    fn open(&mut self, occurrence: Occurrence) {
        let stack = self.stacks.entry(occurrence.family).or_default();
        if occurrence.paragraph_initial && !stack.is_empty() {
            log::trace!(
                "{:?} at {} continues the open quotation into a new paragraph",
                occurrence.family,
                occurrence.offset
            );
            return;
        }
        stack.push(Opener {
            offset: occurrence.offset,
            len: occurrence.len,
        });
    }

    fn close(&mut self, occurrence: Occurrence) {
        let popped = self
            .stacks
            .get_mut(&occurrence.family)
            .and_then(|stack| stack.pop());
        match popped {
            Some(opener) => self.emit(
                opener.offset,
                occurrence.offset + occurrence.len,
                occurrence.family,
            ),
            None => log::debug!(
                "stray {:?} closer at {} dropped",
                occurrence.family,
                occurrence.offset
            ),
        }
    }

    /// The latex family whose top opener starts last.
    fn nearest_latex(&self) -> Option<QuoteFamily> {
        [QuoteFamily::LatexSingle, QuoteFamily::LatexDouble]
            .iter()
            .filter_map(|family| {
                let top = self.stacks.get(family)?.last()?;
                Some((top.offset, *family))
            })
            .max()
            .map(|(_, family)| family)
    }

    /// Both latex families close with apostrophes, so a run is spent on the
    /// nearest openers first, whatever their length.
    fn close_latex(&mut self, occurrence: Occurrence) {
        let mut cursor = occurrence.offset;
        let mut remaining = occurrence.len;

        while remaining > 0 {
            let opener = match self.nearest_latex() {
                Some(family) => self.stacks.get_mut(&family).and_then(|stack| stack.pop()),
                None => None,
            };
            let opener = match opener {
                Some(opener) => opener,
                None => {
                    log::debug!("{} stray apostrophes at {} dropped", remaining, cursor);
                    break;
                }
            };

            if opener.len <= remaining {
                cursor += opener.len;
                remaining -= opener.len;
                self.emit(opener.offset, cursor, QuoteFamily::latex_for_run(opener.len));
            } else {
                // ``` closed by '' : the inner `` closes, the leading ` stays open
                let inner = opener.offset + opener.len - remaining;
                cursor += remaining;
                self.emit(inner, cursor, QuoteFamily::latex_for_run(remaining));
                let rest = Opener {
                    offset: opener.offset,
                    len: opener.len - remaining,
                };
                self.stacks
                    .entry(QuoteFamily::latex_for_run(rest.len))
                    .or_default()
                    .push(rest);
                remaining = 0;
            }
        }
    }

    /// Record a span and drop openers that started inside it, which could
    /// otherwise close later and cross its end.
    fn emit(&mut self, start: usize, end: usize, family: QuoteFamily) {
        for (other, stack) in self.stacks.iter_mut() {
            while stack.last().map_or(false, |opener| opener.offset > start) {
                if let Some(opener) = stack.pop() {
                    log::debug!(
                        "{:?} opener at {} never closed inside quotation {}..{}",
                        other,
                        opener.offset,
                        start,
                        end
                    );
                }
            }
        }
        self.spans.push(RawSpan { start, end, family });
    }
}

/// Classify and match a whole document in one left-to-right pass.
pub fn match_spans(chars: &[char], config: &QuoteConfig) -> Vec<RawSpan> {
    let mut matcher = SpanMatcher::new();
    let mut classifier = Classifier::new(chars, config);
    while let Some(occurrence) = classifier.next_occurrence(&matcher) {
        matcher.accept(occurrence);
    }
    matcher.finish()
}
