//! Delimiter classification.
//!
//! Walks the document once, left to right, and decides for each quote glyph
//! whether it opens a quotation, closes one, or is ordinary text (an
//! apostrophe in "don't", a possessive "Jones'", a stray mark between
//! spaces).
//!
//! The decision for symmetric and apostrophe-like glyphs depends on what is
//! currently open, so the classifier asks an [`OpenQuotes`] implementation
//! (the span matcher) about its stacks instead of keeping a shadow copy.
//! The rules themselves are plain functions of a [`CharContext`] and that
//! state, see [`classify_contextual`].

use crate::config::{ApostrophePolicy, QuoteConfig};
use crate::glyph::{GlyphEntry, GlyphSide, GlyphTable, QuoteFamily, APOSTROPHE, BACKTICK};

/// Resolved role of one glyph occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Open,
    Close,
    Literal,
}

/// A classified delimiter, consumed by the matcher and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Character offset of the first glyph.
    pub offset: usize,
    pub family: QuoteFamily,
    /// Number of glyphs; above 1 only for latex runs.
    pub len: usize,
    pub role: Role,
    /// Only whitespace separates this glyph from a preceding paragraph break.
    pub paragraph_initial: bool,
}

/// Read access to the quotations still waiting for a closer.
pub trait OpenQuotes {
    fn is_open(&self, family: QuoteFamily) -> bool;

    /// Total glyph count of pending latex openers (both latex families).
    fn pending_latex_len(&self) -> usize;

    /// Run length of the latex opener an apostrophe run would close first.
    fn innermost_latex_len(&self) -> Option<usize>;
}

/// The characters on either side of a candidate glyph (or glyph run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharContext {
    pub prev: Option<char>,
    pub next: Option<char>,
}

impl CharContext {
    pub fn new(prev: Option<char>, next: Option<char>) -> Self {
        Self { prev, next }
    }

    /// Context of the glyph run `chars[start..end]`.
    pub fn around(chars: &[char], start: usize, end: usize) -> Self {
        let prev = if start == 0 {
            None
        } else {
            chars.get(start - 1).copied()
        };
        Self {
            prev,
            next: chars.get(end).copied(),
        }
    }

    fn prev_is_word(&self) -> bool {
        self.prev.map_or(false, char::is_alphanumeric)
    }

    fn next_is_word(&self) -> bool {
        self.next.map_or(false, char::is_alphanumeric)
    }

    /// Letters or digits on both sides, as in "don't" or "John`s".
    pub fn is_word_internal(&self) -> bool {
        self.prev_is_word() && self.next_is_word()
    }

    /// Not at the start of the document and not followed by a word
    /// character. Whitespace before is fine: `"Hello, " he said`.
    pub fn can_close(&self) -> bool {
        self.prev.is_some() && !self.next_is_word()
    }

    /// Attached to the following text and not preceded by a word character.
    pub fn can_open(&self) -> bool {
        self.next.map_or(false, |c| !c.is_whitespace()) && !self.prev_is_word()
    }
}

/// Role of a context-sensitive glyph (straight and curly quotes).
///
/// For the glyphs that double as an apostrophe (`'` and `’`) a word-final
/// position ("Jones' cow") inside an open quotation of the same family is
/// resolved by `policy`.
pub fn classify_contextual(
    ctx: CharContext,
    entry: GlyphEntry,
    family_open: bool,
    paragraph_initial: bool,
    policy: ApostrophePolicy,
) -> Role {
    if ctx.is_word_internal() {
        return Role::Literal;
    }

    let closes = matches!(entry.side, GlyphSide::Close | GlyphSide::Both);
    if closes && family_open && ctx.can_close() {
        let apostrophe_like = matches!(entry.family, QuoteFamily::StraightSingle | QuoteFamily::CurlySingle);
        if apostrophe_like && ctx.prev_is_word() && policy == ApostrophePolicy::PreferLiteral {
            return Role::Literal;
        }
        return Role::Close;
    }

    if !ctx.can_open() {
        return Role::Literal;
    }
    match entry.side {
        GlyphSide::Open => Role::Open,
        // a second identical mark cannot nest, only continue a paragraph
        GlyphSide::Both if !family_open || paragraph_initial => Role::Open,
        _ => Role::Literal,
    }
}

/// Whether only whitespace containing at least `min_newlines` line breaks
/// sits between `offset` and the previous non-whitespace character.
pub fn is_paragraph_initial(chars: &[char], offset: usize, min_newlines: usize) -> bool {
    let newlines = chars[..offset]
        .iter()
        .rev()
        .take_while(|c| c.is_whitespace())
        .filter(|&&c| c == '\n')
        .count();
    min_newlines > 0 && newlines >= min_newlines
}

fn run_end(chars: &[char], start: usize, glyph: char) -> usize {
    start
        + chars[start..]
            .iter()
            .take_while(|&&c| c == glyph)
            .count()
}

/// Produces the Open/Close occurrences of a document one at a time.
///
/// Literal glyphs are skipped internally and never reach the caller.
pub struct Classifier<'a> {
    chars: &'a [char],
    config: &'a QuoteConfig,
    table: &'static GlyphTable,
    pos: usize,
}

impl<'a> Classifier<'a> {
    pub fn new(chars: &'a [char], config: &'a QuoteConfig) -> Self {
        Self {
            chars,
            config,
            table: GlyphTable::global(),
            pos: 0,
        }
    }

    fn enabled(&self, family: QuoteFamily) -> bool {
        self.config.single_quotes || !family.is_single()
    }

    fn occurrence(&self, offset: usize, family: QuoteFamily, len: usize, role: Role) -> Occurrence {
        Occurrence {
            offset,
            family,
            len,
            role,
            paragraph_initial: is_paragraph_initial(
                self.chars,
                offset,
                self.config.paragraph_break_newlines,
            ),
        }
    }

    /// Classify the next delimiter against the current stack state.
    pub fn next_occurrence(&mut self, open: &impl OpenQuotes) -> Option<Occurrence> {
        while self.pos < self.chars.len() {
            let offset = self.pos;
            let found = match self.chars[offset] {
                BACKTICK => self.backtick_run(offset),
                APOSTROPHE => self.apostrophe(offset, open),
                c => {
                    self.pos += 1;
                    self.table
                        .lookup(c)
                        .and_then(|entry| self.single_glyph(offset, entry, open))
                }
            };
            if found.is_some() {
                return found;
            }
        }
        None
    }

    fn backtick_run(&mut self, start: usize) -> Option<Occurrence> {
        let end = run_end(self.chars, start, BACKTICK);
        self.pos = end;
        let len = end - start;
        let family = QuoteFamily::latex_for_run(len);
        if !self.enabled(family) || CharContext::around(self.chars, start, end).is_word_internal() {
            log::trace!("backtick run at {} left as text", start);
            return None;
        }
        Some(self.occurrence(start, family, len, Role::Open))
    }

    fn apostrophe(&mut self, start: usize, open: &impl OpenQuotes) -> Option<Occurrence> {
        let pending = open.pending_latex_len();
        if pending > 0 {
            let end = run_end(self.chars, start, APOSTROPHE);
            let ctx = CharContext::around(self.chars, start, end);
            if ctx.can_close() {
                if self.word_final_run_is_text(ctx, end - start, open) {
                    log::trace!("word-final apostrophes at {} left as text", start);
                    self.pos = end;
                    return None;
                }
                let len = (end - start).min(pending);
                self.pos = start + len;
                return Some(self.occurrence(start, QuoteFamily::latex_for_run(len), len, Role::Close));
            }
        }

        self.pos = start + 1;
        let entry = self.table.lookup(APOSTROPHE)?;
        self.single_glyph(start, entry, open)
    }

    /// "Jones'" inside a latex quotation: a lone apostrophe under
    /// `PreferLiteral`, or any run too short for the opener it would close.
    fn word_final_run_is_text(&self, ctx: CharContext, run: usize, open: &impl OpenQuotes) -> bool {
        if !ctx.prev_is_word() {
            return false;
        }
        let literal = self.config.apostrophe_policy == ApostrophePolicy::PreferLiteral && run == 1;
        literal || open.innermost_latex_len().map_or(false, |opener| run < opener)
    }

    fn single_glyph(&self, offset: usize, entry: GlyphEntry, open: &impl OpenQuotes) -> Option<Occurrence> {
        if !self.enabled(entry.family) {
            return None;
        }
        let role = if entry.family.spec().contextual {
            classify_contextual(
                CharContext::around(self.chars, offset, offset + 1),
                entry,
                open.is_open(entry.family),
                is_paragraph_initial(self.chars, offset, self.config.paragraph_break_newlines),
                self.config.apostrophe_policy,
            )
        } else {
            match entry.side {
                GlyphSide::Close => Role::Close,
                _ => Role::Open,
            }
        };
        match role {
            Role::Literal => None,
            role => Some(self.occurrence(offset, entry.family, 1, role)),
        }
    }
}
