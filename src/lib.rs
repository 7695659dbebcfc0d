#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Quotation extraction for layered-nlp pipelines.
//!
//! Finds every quoted passage in a document, resolves quotes nested inside
//! quotes, and reports each passage with its character extent, ordinal
//! index, and the sentences its opening and closing marks fall in.
//!
//! ## Supported conventions
//!
//! Straight (`"…"`, `'…'`), typographic (`“…”`, `‘…’`), latex-style
//! (`` ``…'' ``, `` `…' ``), angle (`«…»`, `‹…›`) and corner bracket
//! (`「…」`, `『…』`) quotations. See [`QuoteFamily`].
//!
//! ## Pipeline
//!
//! 1. [`classifier`]: each quote glyph becomes an opener, a closer, or
//!    ordinary text (apostrophes, possessives, stray marks).
//! 2. [`matcher`]: openers and closers are paired on per-family stacks;
//!    unpaired marks are dropped, repeated paragraph-initial openers
//!    continue the open quotation.
//! 3. [`containment`]: the flat span list becomes a tree.
//! 4. [`sentence`]: spans are mapped onto the caller's sentence ranges.
//!
//! Tokenization and sentence splitting are left to the surrounding
//! pipeline.
//!
//! ## Example
//!
//! ```
//! use layered_quotes::{extract_quotations, QuoteFamily};
//!
//! let text = "'\"Hello,\" he said, \"how are you doing?\"'";
//! let quotes = extract_quotations(text, &[0..text.chars().count()]).unwrap();
//!
//! assert_eq!(quotes.len(), 1);
//! assert_eq!(quotes[0].family, QuoteFamily::StraightSingle);
//! assert_eq!(quotes[0].children.len(), 2);
//! assert_eq!(quotes[0].children[1].text, "\"how are you doing?\"");
//! ```

pub mod classifier;
mod config;
pub mod containment;
mod display;
mod errors;
mod extractor;
mod glyph;
pub mod matcher;
mod quote_span;
pub mod sentence;
mod tokens;

pub use config::{ApostrophePolicy, QuoteConfig};
pub use display::QuoteDisplay;
pub use errors::{QuoteError, QuoteResult};
pub use extractor::{extract_quotations, QuoteExtractor};
pub use glyph::{FamilySpec, GlyphEntry, GlyphSide, GlyphTable, QuoteFamily};
pub use quote_span::{enclosing_path, flatten, Descendants, QuoteSpan};
pub use sentence::SentenceBoundaries;
pub use tokens::attach_tokens;

#[cfg(test)]
mod tests {
    mod corpus;
    mod display;
    mod properties;
}
