use crate::quote_span::QuoteSpan;
use std::fmt::Write;
use unicode_width::UnicodeWidthChar;

/// Rendered in place of line breaks so the document fits on one line.
const NEWLINE_GLYPH: char = '␤';

struct IncludedSpan {
    start: usize,
    end: usize,
    label: String,
}

/// Text rendering of a document with one underline per quotation.
///
/// ```text
/// "Hello,"  he  said
/// ╰──────╯StraightDouble #0
/// ```
///
/// Nested quotations follow their parent and are labelled with their path
/// of sibling indices (`#0.1` is the second child of top-level quotation 0).
pub struct QuoteDisplay<'a> {
    text: &'a str,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> QuoteDisplay<'a> {
    pub fn new(text: &'a str) -> Self {
        QuoteDisplay {
            text,
            include_spans: Vec::new(),
        }
    }

    pub fn include(&mut self, spans: &[QuoteSpan]) {
        self.include_level(spans, "");
    }

    /// Takes self
    pub fn with(mut self, spans: &[QuoteSpan]) -> Self {
        self.include(spans);
        self
    }

    fn include_level(&mut self, spans: &[QuoteSpan], parent_path: &str) {
        for span in spans {
            let path = if parent_path.is_empty() {
                span.index.to_string()
            } else {
                format!("{}.{}", parent_path, span.index)
            };
            self.include_spans.push(IncludedSpan {
                start: span.start,
                end: span.end,
                label: format!("{:?} #{}", span.family, path),
            });
            self.include_level(&span.children, &path);
        }
    }
}

impl<'a> std::fmt::Display for QuoteDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // column where each character starts, plus one entry for the end
        let mut char_idx_to_display_col = Vec::new();
        let mut opening_line = String::new();
        let mut col = 0;
        for c in self.text.chars() {
            let shown = match c {
                '\n' => NEWLINE_GLYPH,
                '\t' | '\r' => ' ',
                c => c,
            };
            char_idx_to_display_col.push(col);
            opening_line.push(shown);
            col += UnicodeWidthChar::width(shown).unwrap_or(0);
        }
        char_idx_to_display_col.push(col);

        f.write_str(&opening_line)?;

        for span in self.include_spans.iter() {
            f.write_char('\n')?;

            let start_col = char_idx_to_display_col[span.start];
            let end_col = char_idx_to_display_col[span.end];
            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&span.label)?;
        }

        Ok(())
    }
}
