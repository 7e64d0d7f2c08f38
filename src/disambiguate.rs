//! Contraction-vs-possessive classification for `'s` tokens.
//!
//! `it's` is a contraction of "it is" while `John's` is a possessive; both
//! end in the same suffix. The classifier only ever answers "contraction"
//! for a closed set of bases and treats everything else as possessive.
//!
//! # Examples
//!
//! ```
//! use contraction_fix::disambiguate::{classify, SuffixVerdict};
//!
//! assert_eq!(classify("it's").verdict, SuffixVerdict::Contraction);
//! assert_eq!(classify("today’s").verdict, SuffixVerdict::Contraction);
//! assert_eq!(classify("John's").verdict, SuffixVerdict::Possessive);
//! ```

use std::sync::LazyLock;

use ahash::AHashSet;

use crate::dictionary::{APOSTROPHE, TYPOGRAPHIC_APOSTROPHE};

const CONTRACTION_BASE_WORDS: &[&str] = &[
    "he", "she", "it", "what", "who", "that", "there", "here", "where", "when", "why", "how",
    "this", "everyone", "somebody", "someone", "something", "nobody", "let",
];

const TIME_WORD_LIST: &[&str] = &[
    "today",
    "tomorrow",
    "tonight",
    "morning",
    "evening",
    "afternoon",
    "week",
    "month",
    "year",
    "century",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Pronouns, determiners and question words whose `'s` is a contraction.
pub static CONTRACTION_BASES: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| CONTRACTION_BASE_WORDS.iter().copied().collect());

/// Time words whose `'s` is read as "is".
pub static TIME_WORDS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| TIME_WORD_LIST.iter().copied().collect());

/// Outcome of classifying an `'s` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixVerdict {
    /// Expand the token.
    Contraction,
    /// Leave the token untouched.
    Possessive,
}

/// The rule that decided a verdict, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixRule {
    /// The base is a pronoun, determiner or question word.
    ContractionBase,
    /// The base is a time word.
    TimeWord,
    /// The base ends in a sibilant or the token is capitalized.
    SibilantOrProperNoun,
    /// Nothing matched; ambiguous bases are possessive.
    Default,
}

/// A verdict together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disambiguation {
    pub verdict: SuffixVerdict,
    pub rule: SuffixRule,
}

/// Whether `token` ends in `'s` with either apostrophe glyph.
pub fn has_s_suffix(token: &str) -> bool {
    let mut chars = token.chars();
    let last = chars.next_back();
    let apostrophe = chars.next_back();
    matches!(last, Some('s' | 'S'))
        && matches!(apostrophe, Some(APOSTROPHE | TYPOGRAPHIC_APOSTROPHE))
}

/// Classify an `'s` token as contraction or possessive.
///
/// The token is expected to satisfy [`has_s_suffix`]; other tokens are
/// classified on their last two characters being stripped all the same.
pub fn classify(token: &str) -> Disambiguation {
    let mut chars = token.chars();
    chars.next_back();
    chars.next_back();
    let base = chars.as_str().to_lowercase();

    let (verdict, rule) = if CONTRACTION_BASES.contains(base.as_str()) {
        (SuffixVerdict::Contraction, SuffixRule::ContractionBase)
    } else if TIME_WORDS.contains(base.as_str()) {
        (SuffixVerdict::Contraction, SuffixRule::TimeWord)
    } else if ends_in_sibilant(&base) || token.chars().next().is_some_and(char::is_uppercase) {
        (SuffixVerdict::Possessive, SuffixRule::SibilantOrProperNoun)
    } else {
        (SuffixVerdict::Possessive, SuffixRule::Default)
    };

    log::trace!("'{}' classified as {:?} by {:?}", token, verdict, rule);
    Disambiguation { verdict, rule }
}

fn ends_in_sibilant(base: &str) -> bool {
    ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| base.ends_with(suffix))
}
