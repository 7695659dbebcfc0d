//! Nesting the flat span list into a tree.

use crate::matcher::RawSpan;
use crate::quote_span::QuoteSpan;

/// Build the quotation forest from matched spans.
///
/// Spans are visited by start ascending, end descending, keeping a stack of
/// ancestors that are still open. The matcher guarantees spans never
/// partially overlap, so a span either fits inside the top ancestor or the
/// ancestor is finished. Sentence and token fields are left empty for the
/// later passes.
pub fn build_tree(chars: &[char], mut spans: Vec<RawSpan>) -> Vec<QuoteSpan> {
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    spans.dedup();

    let mut roots = Vec::new();
    let mut ancestors: Vec<QuoteSpan> = Vec::new();

    for raw in spans {
        while let Some(top) = ancestors.last() {
            if top.end >= raw.end {
                break;
            }
            if let Some(done) = ancestors.pop() {
                attach(&mut ancestors, &mut roots, done);
            }
        }
        ancestors.push(QuoteSpan {
            start: raw.start,
            end: raw.end,
            text: chars[raw.start..raw.end].iter().collect(),
            family: raw.family,
            index: 0,
            children: Vec::new(),
            sentence_begin: 0,
            sentence_end: 0,
            tokens: None,
        });
    }
    while let Some(done) = ancestors.pop() {
        attach(&mut ancestors, &mut roots, done);
    }

    assign_indices(&mut roots);
    roots
}

fn attach(ancestors: &mut Vec<QuoteSpan>, roots: &mut Vec<QuoteSpan>, done: QuoteSpan) {
    match ancestors.last_mut() {
        Some(parent) => parent.children.push(done),
        None => roots.push(done),
    }
}

fn assign_indices(level: &mut [QuoteSpan]) {
    for (index, span) in level.iter_mut().enumerate() {
        span.index = index;
        assign_indices(&mut span.children);
    }
}
