//! Configuration for contraction fixer engines.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::DictionarySource;

/// Default capacity of the per-engine result cache.
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Default number of characters shown on each side of a preview match.
pub const DEFAULT_CONTEXT_RADIUS: usize = 10;

/// Configuration for a [`ContractionFixer`](crate::fixer::ContractionFixer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixerConfig {
    /// Whether to load the informal contractions dictionary.
    pub use_informal: bool,

    /// Whether to load the internet slang dictionary.
    pub use_slang: bool,

    /// Maximum number of memoized results. 0 disables the cache.
    pub cache_size: usize,

    /// Where the dictionaries are read from.
    pub source: DictionarySource,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            use_informal: true,
            use_slang: true,
            cache_size: DEFAULT_CACHE_SIZE,
            source: DictionarySource::Bundled,
        }
    }
}

impl FixerConfig {
    /// Create a config with the given dictionary selection.
    pub fn new(use_informal: bool, use_slang: bool) -> Self {
        Self {
            use_informal,
            use_slang,
            ..Default::default()
        }
    }

    /// Enable or disable the informal dictionary.
    pub fn with_informal(mut self, use_informal: bool) -> Self {
        self.use_informal = use_informal;
        self
    }

    /// Enable or disable the slang dictionary.
    pub fn with_slang(mut self, use_slang: bool) -> Self {
        self.use_slang = use_slang;
        self
    }

    /// Set the result cache capacity.
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    /// Set the dictionary source.
    pub fn with_source(mut self, source: DictionarySource) -> Self {
        self.source = source;
        self
    }

    /// Read dictionaries from a directory instead of the bundled data.
    pub fn with_dictionary_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.with_source(DictionarySource::directory(dir))
    }

    /// Whether this config selects the same dictionaries as the default.
    pub fn has_default_dictionaries(&self) -> bool {
        self.use_informal && self.use_slang && self.source == DictionarySource::Bundled
    }
}
