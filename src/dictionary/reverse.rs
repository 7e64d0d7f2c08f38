//! Reverse table used to contract text.
//!
//! Many contractions share an expansion (`shan't` and `sha'n't` both mean
//! "shall not"), and many expansions are ambiguous to re-contract. The
//! reverse table therefore only covers a curated set of expansions and
//! registers exactly one contraction for each.

use std::cmp::Ordering;

use ahash::{AHashMap, AHashSet};

use crate::dictionary::vocabulary::Vocabulary;
use crate::dictionary::{APOSTROPHE, starts_with_apostrophe};

/// Expansions considered safe to turn back into a contraction.
pub const SAFE_EXPANSIONS: &[&str] = &[
    "cannot",
    "do not",
    "does not",
    "did not",
    "is not",
    "are not",
    "was not",
    "were not",
    "have not",
    "has not",
    "had not",
    "will not",
    "would not",
    "should not",
    "could not",
    "must not",
    "might not",
    "need not",
    "shall not",
    "i am",
    "i have",
    "i will",
    "i would",
    "you are",
    "you have",
    "you will",
    "you would",
    "we are",
    "we have",
    "we will",
    "we would",
    "they are",
    "they have",
    "they will",
    "they would",
    "he will",
    "he would",
    "she will",
    "she would",
    "it will",
    "he is",
    "she is",
    "it is",
    "that is",
    "there is",
    "what is",
    "who is",
    "here is",
    "where is",
    "how is",
    "let us",
    "would have",
    "could have",
    "should have",
    "might have",
    "must have",
];

/// Expansion phrase → canonical contraction.
#[derive(Debug, Clone, Default)]
pub struct ReverseTable {
    entries: AHashMap<String, String>,
    contractible: AHashSet<String>,
}

impl ReverseTable {
    /// Derive the reverse table for `vocabulary` over [`SAFE_EXPANSIONS`].
    pub fn derive(vocabulary: &Vocabulary) -> Self {
        let contractible = SAFE_EXPANSIONS.iter().map(|s| s.to_string()).collect();
        Self::derive_with(vocabulary, contractible)
    }

    /// Derive the reverse table for `vocabulary` over a custom expansion set.
    pub fn derive_with(vocabulary: &Vocabulary, contractible: AHashSet<String>) -> Self {
        let mut entries: AHashMap<String, String> = AHashMap::new();

        for (key, expansion) in vocabulary.iter() {
            if !is_candidate(key) {
                continue;
            }
            let phrase = expansion.to_lowercase();
            if !contractible.contains(&phrase) {
                continue;
            }
            let replace = entries
                .get(&phrase)
                .is_none_or(|current| prefer(key, current) == Ordering::Less);
            if replace {
                entries.insert(phrase, key.to_string());
            }
        }

        ReverseTable {
            entries,
            contractible,
        }
    }

    /// Allow `expansion` to be re-contracted from now on.
    pub fn allow(&mut self, expansion: &str) {
        self.contractible.insert(expansion.to_lowercase());
    }

    /// Recompute the registered contraction for one expansion.
    ///
    /// The entry is dropped when no candidate is left in `vocabulary`.
    pub fn refresh(&mut self, expansion: &str, vocabulary: &Vocabulary) {
        let phrase = expansion.to_lowercase();
        if !self.contractible.contains(&phrase) {
            self.entries.remove(&phrase);
            return;
        }

        let best = vocabulary
            .iter()
            .filter(|(key, value)| is_candidate(key) && value.to_lowercase() == phrase)
            .map(|(key, _)| key)
            .min_by(|a, b| prefer(a, b));

        match best {
            Some(key) => {
                self.entries.insert(phrase, key.to_string());
            }
            None => {
                self.entries.remove(&phrase);
            }
        }
    }

    /// Registered contraction for an exact (lowercase) phrase.
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.entries.get(phrase).map(String::as_str)
    }

    /// Resolve a matched phrase as written, then lowercased.
    pub fn lookup(&self, surface: &str) -> Option<&str> {
        self.get(surface)
            .or_else(|| self.get(&surface.to_lowercase()))
    }

    /// All phrases with a registered contraction.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no phrase is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// ASCII-spelled keys with an inner apostrophe may be chosen as contractions.
fn is_candidate(key: &str) -> bool {
    key.contains(APOSTROPHE) && !starts_with_apostrophe(key)
}

/// Shorter contractions first, then lexicographic order.
fn prefer(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}
