//! The contraction fixer engine.
//!
//! [`ContractionFixer`] owns a merged vocabulary, the reverse table derived
//! from it, lazily compiled matchers for both directions and a bounded result
//! cache. It is `Send + Sync`; share it between threads by reference or
//! through an `Arc`.
//!
//! # Examples
//!
//! ```
//! use contraction_fix::config::FixerConfig;
//! use contraction_fix::fixer::ContractionFixer;
//!
//! let fixer = ContractionFixer::new(FixerConfig::default()).unwrap();
//!
//! assert_eq!(fixer.fix("I can't do it"), "I cannot do it");
//! assert_eq!(fixer.fix("John's car"), "John's car");
//! assert_eq!(fixer.contract("I do not know"), "I don't know");
//!
//! let matches = fixer.preview("I can't believe it's not butter!", 10);
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].text, "can't");
//! assert_eq!(matches[1].replacement, "it is");
//! ```

pub mod case;
pub mod preview;

use std::fmt;
use std::sync::OnceLock;

use parking_lot::{Mutex, RwLock};
use rayon::prelude::*;

use crate::cache::{CacheStats, Direction, ResultCache};
use crate::config::{DEFAULT_CONTEXT_RADIUS, FixerConfig};
use crate::dictionary::{ReverseTable, Vocabulary, has_apostrophe, starts_with_apostrophe};
use crate::disambiguate::{SuffixVerdict, classify, has_s_suffix};
use crate::error::Result;
use crate::matcher::PatternMatcher;

use self::case::match_case;
use self::preview::context_window;
pub use self::preview::MatchRecord;

/// Vocabulary state guarded by the engine lock.
///
/// The matchers are compiled on first use and reset whenever the tables
/// change; `generation` increases with every mutation.
struct VocabularyState {
    vocabulary: Vocabulary,
    reverse: ReverseTable,
    generation: u64,
    forward: OnceLock<PatternMatcher>,
    backward: OnceLock<PatternMatcher>,
}

impl VocabularyState {
    fn new(vocabulary: Vocabulary) -> Self {
        let reverse = ReverseTable::derive(&vocabulary);
        VocabularyState {
            vocabulary,
            reverse,
            generation: 0,
            forward: OnceLock::new(),
            backward: OnceLock::new(),
        }
    }

    fn forward_matcher(&self) -> &PatternMatcher {
        let matcher = self
            .forward
            .get_or_init(|| PatternMatcher::compile(self.vocabulary.keys(), self.generation));
        debug_assert_eq!(matcher.generation(), self.generation);
        matcher
    }

    fn reverse_matcher(&self) -> &PatternMatcher {
        let matcher = self
            .backward
            .get_or_init(|| PatternMatcher::compile(self.reverse.phrases(), self.generation));
        debug_assert_eq!(matcher.generation(), self.generation);
        matcher
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.forward = OnceLock::new();
        self.backward = OnceLock::new();
    }

    /// Replacement for a forward match, or `None` to leave it untouched.
    fn expand(&self, surface: &str) -> Option<String> {
        if has_s_suffix(surface) && classify(surface).verdict == SuffixVerdict::Possessive {
            return None;
        }
        self.vocabulary
            .lookup(surface)
            .map(|expansion| match_case(surface, expansion))
    }

    /// Replacement for a reverse match.
    fn contract(&self, surface: &str) -> Option<String> {
        self.reverse
            .lookup(surface)
            .map(|contraction| match_case(surface, contraction))
    }

    fn fix_text(&self, text: &str) -> String {
        rewrite(text, self.forward_matcher(), |surface| self.expand(surface))
    }

    fn contract_text(&self, text: &str) -> String {
        rewrite(text, self.reverse_matcher(), |surface| self.contract(surface))
    }
}

/// Replace every match in `text` with `resolve(match)`, copying everything
/// else verbatim.
fn rewrite<F>(text: &str, matcher: &PatternMatcher, resolve: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut output = String::with_capacity(text.len() + text.len() / 4);
    let mut last_match_end = 0;

    for m in matcher.find_iter(text) {
        output.push_str(&text[last_match_end..m.start()]);
        match resolve(m.as_str()) {
            Some(replacement) => output.push_str(&replacement),
            None => output.push_str(m.as_str()),
        }
        last_match_end = m.end();
    }

    output.push_str(&text[last_match_end..]);
    output
}

/// Expands and contracts English contractions, informal forms and slang.
pub struct ContractionFixer {
    config: FixerConfig,
    state: RwLock<VocabularyState>,
    cache: Mutex<ResultCache>,
}

impl ContractionFixer {
    /// Build an engine, loading the dictionaries selected by `config`.
    ///
    /// Fails with [`FixerError::Load`](crate::error::FixerError::Load) when a
    /// required dictionary is missing or malformed; no engine is returned in
    /// that case.
    pub fn new(config: FixerConfig) -> Result<Self> {
        let vocabulary = Vocabulary::load(&config)?;
        Ok(Self::with_vocabulary(vocabulary, config))
    }

    /// Build an engine over an already assembled vocabulary.
    ///
    /// The dictionary selection in `config` is kept for reference only.
    pub fn with_vocabulary(vocabulary: Vocabulary, config: FixerConfig) -> Self {
        let state = VocabularyState::new(vocabulary);
        log::debug!(
            "Contraction fixer ready: {} keys, {} contractible phrases, cache size {}",
            state.vocabulary.len(),
            state.reverse.len(),
            config.cache_size
        );

        ContractionFixer {
            cache: Mutex::new(ResultCache::new(config.cache_size)),
            state: RwLock::new(state),
            config,
        }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    /// Expand the contractions in `text`.
    ///
    /// Text outside of matched spans is copied unchanged. Possessive `'s`
    /// forms are left alone.
    pub fn fix(&self, text: &str) -> String {
        self.rewrite_cached(Direction::Fix, text)
    }

    /// [`fix`](Self::fix) each text, in parallel, preserving order.
    pub fn fix_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.fix(t.as_ref())).collect()
    }

    /// Replace known expansions in `text` with their canonical contraction.
    pub fn contract(&self, text: &str) -> String {
        self.rewrite_cached(Direction::Contract, text)
    }

    /// [`contract`](Self::contract) each text, in parallel, preserving order.
    pub fn contract_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.contract(t.as_ref())).collect()
    }

    /// List the forward matches in `text` without changing it.
    ///
    /// Each record carries the replacement [`fix`](Self::fix) would make and
    /// up to `context_radius` characters of context on each side.
    pub fn preview(&self, text: &str, context_radius: usize) -> Vec<MatchRecord> {
        let state = self.state.read();
        state
            .forward_matcher()
            .find_iter(text)
            .into_iter()
            .map(|m| {
                let surface = m.as_str();
                MatchRecord {
                    text: surface.to_string(),
                    start: m.start(),
                    end: m.end(),
                    replacement: state
                        .expand(surface)
                        .unwrap_or_else(|| surface.to_string()),
                    context: context_window(text, m.start(), m.end(), context_radius)
                        .to_string(),
                }
            })
            .collect()
    }

    /// [`preview`](Self::preview) with the default context radius.
    pub fn preview_default(&self, text: &str) -> Vec<MatchRecord> {
        self.preview(text, DEFAULT_CONTEXT_RADIUS)
    }

    /// Add or overwrite a contraction.
    ///
    /// The key is stored in lowercase under both apostrophe spellings. A key
    /// containing an inner apostrophe also becomes the canonical contraction
    /// of `expansion` when it is the shortest candidate. Empty keys are
    /// ignored.
    pub fn add_contraction(&self, contraction: &str, expansion: &str) {
        if contraction.trim().is_empty() {
            log::warn!("Ignoring empty contraction for '{}'", expansion);
            return;
        }

        let mut guard = self.state.write();
        let state = &mut *guard;

        let previous = state.vocabulary.insert(contraction, expansion);
        if has_apostrophe(contraction) && !starts_with_apostrophe(contraction) {
            state.reverse.allow(expansion);
        }
        state.reverse.refresh(expansion, &state.vocabulary);
        if let Some(previous) = previous {
            if previous.to_lowercase() != expansion.to_lowercase() {
                state.reverse.refresh(&previous, &state.vocabulary);
            }
        }

        state.invalidate();
        self.cache.lock().clear();
        log::debug!(
            "Added '{}' -> '{}' (generation {})",
            contraction,
            expansion,
            state.generation
        );
    }

    /// Remove a contraction and its apostrophe twin.
    ///
    /// If it was the canonical contraction of its expansion, the next best
    /// remaining candidate takes its place, or the reverse mapping is dropped.
    pub fn remove_contraction(&self, contraction: &str) {
        let mut guard = self.state.write();
        let state = &mut *guard;

        match state.vocabulary.remove(contraction) {
            Some(expansion) => {
                state.reverse.refresh(&expansion, &state.vocabulary);
                log::debug!("Removed '{}' -> '{}'", contraction, expansion);
            }
            None => log::debug!("Removed '{}', which was not present", contraction),
        }

        state.invalidate();
        self.cache.lock().clear();
    }

    /// Number of keys, counting both apostrophe spellings.
    pub fn len(&self) -> usize {
        self.state.read().vocabulary.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.state.read().vocabulary.is_empty()
    }

    /// Whether `contraction` is known, in any case or apostrophe spelling.
    pub fn contains(&self, contraction: &str) -> bool {
        self.state.read().vocabulary.contains(contraction)
    }

    /// The stored expansion of `contraction`.
    pub fn expansion_of(&self, contraction: &str) -> Option<String> {
        self.state
            .read()
            .vocabulary
            .lookup(contraction)
            .map(str::to_string)
    }

    /// The canonical contraction registered for `expansion`.
    pub fn contraction_of(&self, expansion: &str) -> Option<String> {
        self.state
            .read()
            .reverse
            .lookup(expansion)
            .map(str::to_string)
    }

    /// Vocabulary generation; increases with every mutation.
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Result cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    fn rewrite_cached(&self, direction: Direction, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // Held for the whole rewrite so no mutation can interleave.
        let state = self.state.read();
        if let Some(hit) = self.cache.lock().get(direction, state.generation, text) {
            return hit;
        }

        let result = match direction {
            Direction::Fix => state.fix_text(text),
            Direction::Contract => state.contract_text(text),
        };

        self.cache
            .lock()
            .insert(direction, state.generation, text, &result);
        result
    }
}

impl fmt::Debug for ContractionFixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("ContractionFixer")
            .field("config", &self.config)
            .field("keys", &state.vocabulary.len())
            .field("contractible", &state.reverse.len())
            .field("generation", &state.generation)
            .finish()
    }
}
