//! The catalog of recognized quotation conventions.
//!
//! Every glyph the engine reacts to is listed here. Anything that is not in
//! [`GlyphTable`] (low-9 marks, primes, guillemet look-alikes) is ordinary
//! text, however similar it may look to a supported mark.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A quotation convention sharing one opening/closing glyph pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum QuoteFamily {
    /// `"…"`
    StraightDouble,
    /// `'…'`
    StraightSingle,
    /// `“…”`
    CurlyDouble,
    /// `‘…’`
    CurlySingle,
    /// ` ``…'' `, and any longer backtick run
    LatexDouble,
    /// `` `…' ``
    LatexSingle,
    /// `«…»`
    AngleDouble,
    /// `‹…›`
    AngleSingle,
    /// `「…」`
    CornerBracket,
    /// `『…』`
    WhiteCornerBracket,
}

/// Static description of one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySpec {
    pub family: QuoteFamily,
    pub open: char,
    pub close: char,
    /// Same glyph opens and closes.
    pub symmetric: bool,
    /// Role depends on the neighbouring characters (word-internal apostrophes).
    pub contextual: bool,
}

pub const BACKTICK: char = '`';
pub const APOSTROPHE: char = '\'';

static FAMILIES: [FamilySpec; 10] = [
    FamilySpec {
        family: QuoteFamily::StraightDouble,
        open: '"',
        close: '"',
        symmetric: true,
        contextual: true,
    },
    FamilySpec {
        family: QuoteFamily::StraightSingle,
        open: APOSTROPHE,
        close: APOSTROPHE,
        symmetric: true,
        contextual: true,
    },
    FamilySpec {
        family: QuoteFamily::CurlyDouble,
        open: '\u{201C}',
        close: '\u{201D}',
        symmetric: false,
        contextual: true,
    },
    FamilySpec {
        family: QuoteFamily::CurlySingle,
        open: '\u{2018}',
        close: '\u{2019}',
        symmetric: false,
        contextual: true,
    },
    FamilySpec {
        family: QuoteFamily::LatexDouble,
        open: BACKTICK,
        close: APOSTROPHE,
        symmetric: false,
        contextual: false,
    },
    FamilySpec {
        family: QuoteFamily::LatexSingle,
        open: BACKTICK,
        close: APOSTROPHE,
        symmetric: false,
        contextual: false,
    },
    FamilySpec {
        family: QuoteFamily::AngleDouble,
        open: '\u{00AB}',
        close: '\u{00BB}',
        symmetric: false,
        contextual: false,
    },
    FamilySpec {
        family: QuoteFamily::AngleSingle,
        open: '\u{2039}',
        close: '\u{203A}',
        symmetric: false,
        contextual: false,
    },
    FamilySpec {
        family: QuoteFamily::CornerBracket,
        open: '\u{300C}',
        close: '\u{300D}',
        symmetric: false,
        contextual: false,
    },
    FamilySpec {
        family: QuoteFamily::WhiteCornerBracket,
        open: '\u{300E}',
        close: '\u{300F}',
        symmetric: false,
        contextual: false,
    },
];

impl QuoteFamily {
    pub const ALL: [QuoteFamily; 10] = [
        QuoteFamily::StraightDouble,
        QuoteFamily::StraightSingle,
        QuoteFamily::CurlyDouble,
        QuoteFamily::CurlySingle,
        QuoteFamily::LatexDouble,
        QuoteFamily::LatexSingle,
        QuoteFamily::AngleDouble,
        QuoteFamily::AngleSingle,
        QuoteFamily::CornerBracket,
        QuoteFamily::WhiteCornerBracket,
    ];

    pub fn spec(self) -> &'static FamilySpec {
        // FAMILIES is declared in the same order as the enum
        &FAMILIES[self as usize]
    }

    pub fn is_latex(self) -> bool {
        matches!(self, QuoteFamily::LatexDouble | QuoteFamily::LatexSingle)
    }

    /// Single-mark conventions, which `QuoteConfig::single_quotes` can switch off.
    pub fn is_single(self) -> bool {
        matches!(
            self,
            QuoteFamily::StraightSingle | QuoteFamily::CurlySingle | QuoteFamily::LatexSingle
        )
    }

    /// Latex family for an opener or closer run of `len` marks.
    pub fn latex_for_run(len: usize) -> QuoteFamily {
        if len == 1 {
            QuoteFamily::LatexSingle
        } else {
            QuoteFamily::LatexDouble
        }
    }
}

/// Which end of a quotation a glyph can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSide {
    Open,
    Close,
    /// Symmetric glyph, role decided from context.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEntry {
    pub family: QuoteFamily,
    pub side: GlyphSide,
}

/// Process-wide lookup from a single glyph to its family.
///
/// Backtick and apostrophe runs are also latex delimiters; the classifier
/// scans those runs itself before falling back to this table.
pub struct GlyphTable {
    by_glyph: HashMap<char, GlyphEntry>,
}

static GLYPHS: Lazy<GlyphTable> = Lazy::new(|| {
    let mut by_glyph = HashMap::new();
    for spec in FAMILIES.iter().filter(|spec| !spec.family.is_latex()) {
        if spec.symmetric {
            by_glyph.insert(
                spec.open,
                GlyphEntry {
                    family: spec.family,
                    side: GlyphSide::Both,
                },
            );
        } else {
            by_glyph.insert(
                spec.open,
                GlyphEntry {
                    family: spec.family,
                    side: GlyphSide::Open,
                },
            );
            by_glyph.insert(
                spec.close,
                GlyphEntry {
                    family: spec.family,
                    side: GlyphSide::Close,
                },
            );
        }
    }
    GlyphTable { by_glyph }
});

impl GlyphTable {
    pub fn global() -> &'static GlyphTable {
        &GLYPHS
    }

    pub fn lookup(&self, c: char) -> Option<GlyphEntry> {
        self.by_glyph.get(&c).copied()
    }

    pub fn is_quote_glyph(&self, c: char) -> bool {
        c == BACKTICK || self.by_glyph.contains_key(&c)
    }
}
