//! Multi-pattern matcher over dictionary keys.
//!
//! All keys are compiled into a single ASCII-case-insensitive Aho-Corasick
//! automaton. Every occurrence of every key is found, candidates that violate
//! the boundary rule of their [`KeyClass`] are discarded, and the remaining
//! candidates are resolved leftmost-first, longest-first without overlaps.
//!
//! # Examples
//!
//! ```
//! use contraction_fix::matcher::PatternMatcher;
//!
//! let matcher = PatternMatcher::compile(["would", "would have", "can't"], 0);
//! let found: Vec<_> = matcher
//!     .find_iter("I Would have, but can'tx")
//!     .into_iter()
//!     .map(|m| m.as_str())
//!     .collect();
//!
//! assert_eq!(found, vec!["Would have"]);
//! ```

use aho_corasick::{AhoCorasick, MatchKind};

use crate::dictionary::has_apostrophe;

/// Boundary class of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// Keys containing an apostrophe; the match must not touch a word
    /// character on either side.
    Apostrophe,
    /// Plain keys; whole-word boundaries.
    Plain,
}

impl KeyClass {
    /// Classify a key.
    pub fn of(key: &str) -> Self {
        if has_apostrophe(key) {
            KeyClass::Apostrophe
        } else {
            KeyClass::Plain
        }
    }
}

/// One accepted match in a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch<'t> {
    haystack: &'t str,
    start: usize,
    end: usize,
    pattern: usize,
}

impl<'t> KeyMatch<'t> {
    /// Byte offset of the first matched byte.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last matched byte.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched text as it appears in the haystack.
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.start..self.end]
    }

    /// Index of the matched key in [`PatternMatcher::keys`].
    pub fn pattern(&self) -> usize {
        self.pattern
    }
}

/// A compiled matcher over a fixed key set.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    automaton: Option<AhoCorasick>,
    keys: Vec<String>,
    classes: Vec<KeyClass>,
    generation: u64,
}

impl PatternMatcher {
    /// Compile a matcher over `keys`, stamped with the vocabulary `generation`.
    ///
    /// Keys are partitioned into apostrophe-bearing and plain keys and
    /// ordered longest-first within each partition, so pattern indices are
    /// deterministic. Empty keys are skipped. A key set that is empty (or
    /// that the automaton cannot be built for) yields a matcher that matches
    /// nothing.
    pub fn compile<I, S>(keys: I, generation: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys: Vec<String> = keys
            .into_iter()
            .map(|k| k.as_ref().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        keys.sort_by(|a, b| {
            let class_a = KeyClass::of(a) == KeyClass::Plain;
            let class_b = KeyClass::of(b) == KeyClass::Plain;
            class_a
                .cmp(&class_b)
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| a.cmp(b))
        });
        keys.dedup();

        if keys.is_empty() {
            return Self::empty(generation);
        }

        let automaton = match AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .ascii_case_insensitive(true)
            .build(&keys)
        {
            Ok(ac) => ac,
            Err(e) => {
                log::error!(
                    "Failed to compile matcher over {} keys, matching nothing: {}",
                    keys.len(),
                    e
                );
                return Self::empty(generation);
            }
        };

        let classes = keys.iter().map(|k| KeyClass::of(k)).collect();
        log::debug!(
            "Compiled matcher over {} keys (generation {})",
            keys.len(),
            generation
        );

        PatternMatcher {
            automaton: Some(automaton),
            keys,
            classes,
            generation,
        }
    }

    /// A matcher that never matches.
    pub fn empty(generation: u64) -> Self {
        PatternMatcher {
            automaton: None,
            keys: Vec::new(),
            classes: Vec::new(),
            generation,
        }
    }

    /// Vocabulary generation this matcher was compiled from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compiled keys, indexed by [`KeyMatch::pattern`].
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of compiled keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the matcher has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Find all accepted, non-overlapping matches in left-to-right order.
    ///
    /// At each position the longest key satisfying its boundary rule wins.
    pub fn find_iter<'t>(&self, haystack: &'t str) -> Vec<KeyMatch<'t>> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let mut candidates: Vec<KeyMatch<'t>> = automaton
            .find_overlapping_iter(haystack)
            .map(|m| KeyMatch {
                haystack,
                start: m.start(),
                end: m.end(),
                pattern: m.pattern().as_usize(),
            })
            .filter(|m| self.is_bounded(m))
            .collect();

        candidates.sort_unstable_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then(b.end.cmp(&a.end))
                .then(a.pattern.cmp(&b.pattern))
        });

        let mut matches = Vec::with_capacity(candidates.len());
        let mut cursor = 0;
        for candidate in candidates {
            if candidate.start < cursor {
                continue;
            }
            cursor = candidate.end;
            matches.push(candidate);
        }

        matches
    }

    /// Whether any key occurs in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        !self.find_iter(haystack).is_empty()
    }

    fn is_bounded(&self, m: &KeyMatch<'_>) -> bool {
        let before = m.haystack[..m.start].chars().next_back();
        let after = m.haystack[m.end..].chars().next();
        if before.is_some_and(is_word_char) {
            return false;
        }

        match self.classes[m.pattern] {
            KeyClass::Apostrophe => !after.is_some_and(is_word_char),
            KeyClass::Plain => {
                // Keys ending in punctuation ("jan.") are bounded by it.
                let ends_in_word = m.as_str().chars().next_back().is_some_and(is_word_char);
                !ends_in_word || !after.is_some_and(is_word_char)
            }
        }
    }
}

/// Regex `\w`: alphanumeric or underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
