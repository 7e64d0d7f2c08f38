//! The merged contraction table.

use ahash::AHashMap;

use crate::config::FixerConfig;
use crate::dictionary::source::{DictionaryKind, month_abbreviations};
use crate::dictionary::{
    alternate_apostrophe, has_apostrophe, to_ascii_apostrophes, to_typographic_apostrophes,
};
use crate::error::Result;

/// Case-folded contraction → expansion table.
///
/// Keys are stored in lowercase. Every key containing an apostrophe is stored
/// under both apostrophe glyphs, so the table always resolves `can't` and
/// `can’t` identically.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: AHashMap<String, String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            entries: AHashMap::new(),
        }
    }

    /// Load and merge the dictionaries selected by `config`.
    ///
    /// Layers are applied standard → informal → slang, so later layers win
    /// on key collisions. Any load failure aborts the whole build.
    pub fn load(config: &FixerConfig) -> Result<Self> {
        let mut standard = config.source.load(DictionaryKind::Standard)?;
        standard.extend(month_abbreviations());

        let mut layers = vec![standard];
        if config.use_informal {
            layers.push(config.source.load(DictionaryKind::Informal)?);
        }
        if config.use_slang {
            layers.push(config.source.load(DictionaryKind::Slang)?);
        }

        Ok(Self::from_layers(layers))
    }

    /// Merge layers of (key, expansion) pairs; later layers override earlier ones.
    pub fn from_layers<I, L>(layers: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = (String, String)>,
    {
        let mut vocabulary = Vocabulary::new();
        for layer in layers {
            for (key, expansion) in layer {
                vocabulary.insert(&key, &expansion);
            }
        }
        vocabulary
    }

    /// Insert a contraction, returning the expansion it previously had.
    ///
    /// Empty keys are ignored.
    pub fn insert(&mut self, key: &str, expansion: &str) -> Option<String> {
        let key = key.to_lowercase();
        if key.is_empty() {
            return None;
        }

        if has_apostrophe(&key) {
            let ascii = to_ascii_apostrophes(&key);
            let typographic = to_typographic_apostrophes(&key);
            let previous = self.entries.insert(ascii, expansion.to_string());
            let previous_twin = self.entries.insert(typographic, expansion.to_string());
            previous.or(previous_twin)
        } else {
            self.entries.insert(key, expansion.to_string())
        }
    }

    /// Remove a contraction and its apostrophe twin, returning its expansion.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let key = key.to_lowercase();
        if has_apostrophe(&key) {
            let ascii = self.entries.remove(&to_ascii_apostrophes(&key));
            let typographic = self.entries.remove(&to_typographic_apostrophes(&key));
            ascii.or(typographic)
        } else {
            self.entries.remove(&key)
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolve a matched surface form.
    ///
    /// Tries the text as written, then lowercased, then lowercased with the
    /// other apostrophe glyph.
    pub fn lookup(&self, surface: &str) -> Option<&str> {
        if let Some(expansion) = self.get(surface) {
            return Some(expansion);
        }

        let lower = surface.to_lowercase();
        if let Some(expansion) = self.get(&lower) {
            return Some(expansion);
        }

        alternate_apostrophe(&lower).and_then(|alt| self.get(&alt))
    }

    /// Check whether a key (in any case or apostrophe spelling) is present.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Iterate over all keys, including apostrophe twins.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all (key, expansion) pairs, including apostrophe twins.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored keys, counting apostrophe twins separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
