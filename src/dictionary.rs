//! Dictionary store for contraction lookup.
//!
//! This module loads the standard, informal and slang dictionaries, merges
//! them into one case-folded [`Vocabulary`](vocabulary::Vocabulary) and
//! derives the [`ReverseTable`](reverse::ReverseTable) used when contracting
//! text.
//!
//! # Components
//!
//! - [`source`] - Dictionary resources (bundled or on disk) and JSON parsing
//! - [`vocabulary`] - The merged forward table with apostrophe twins
//! - [`reverse`] - Expansion → contraction table for the contract direction
//!
//! # Apostrophes
//!
//! Input text may use either the ASCII apostrophe (`'`, U+0027) or the
//! typographic one (`’`, U+2019). Every apostrophe-bearing key is stored
//! under both spellings so that either resolves to the same expansion.
//!
//! ```
//! use contraction_fix::dictionary::{alternate_apostrophe, has_apostrophe};
//!
//! assert!(has_apostrophe("can’t"));
//! assert_eq!(alternate_apostrophe("can't").as_deref(), Some("can’t"));
//! assert_eq!(alternate_apostrophe("btw"), None);
//! ```

pub mod reverse;
pub mod source;
pub mod vocabulary;

pub use reverse::ReverseTable;
pub use source::{DictionaryKind, DictionarySource};
pub use vocabulary::Vocabulary;

/// The ASCII apostrophe.
pub const APOSTROPHE: char = '\'';

/// The typographic (right single quotation mark) apostrophe.
pub const TYPOGRAPHIC_APOSTROPHE: char = '\u{2019}';

/// Check whether `s` contains either apostrophe glyph.
pub fn has_apostrophe(s: &str) -> bool {
    s.contains([APOSTROPHE, TYPOGRAPHIC_APOSTROPHE])
}

/// Check whether `s` begins with either apostrophe glyph (`'tis`, `’em`).
pub fn starts_with_apostrophe(s: &str) -> bool {
    s.starts_with([APOSTROPHE, TYPOGRAPHIC_APOSTROPHE])
}

/// Spell `s` with ASCII apostrophes only.
pub fn to_ascii_apostrophes(s: &str) -> String {
    s.replace(TYPOGRAPHIC_APOSTROPHE, "'")
}

/// Spell `s` with typographic apostrophes only.
pub fn to_typographic_apostrophes(s: &str) -> String {
    s.replace(APOSTROPHE, "\u{2019}")
}

/// Return the spelling of `s` using the other apostrophe glyph.
///
/// Strings containing ASCII apostrophes are converted to typographic ones and
/// vice versa. Returns `None` when `s` has no apostrophe at all.
pub fn alternate_apostrophe(s: &str) -> Option<String> {
    if s.contains(APOSTROPHE) {
        Some(to_typographic_apostrophes(s))
    } else if s.contains(TYPOGRAPHIC_APOSTROPHE) {
        Some(to_ascii_apostrophes(s))
    } else {
        None
    }
}
