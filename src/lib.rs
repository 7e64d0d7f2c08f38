//! # contraction-fix
//!
//! Dictionary-driven expansion (and contraction) of English contractions,
//! informal speech forms and internet slang.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Single-pass Aho-Corasick matching over the whole vocabulary
//! - Both ASCII (`'`) and typographic (`’`) apostrophes
//! - Possessive protection (`John's car` is left alone, `it's` is expanded)
//! - Case preservation (`CAN'T` → `CANNOT`, `They're` → `They are`)
//! - Reverse direction (`do not` → `don't`) with deterministic choices
//! - Runtime vocabulary changes, safe under concurrent use
//! - Bounded LRU memoization
//!
//! ## Example
//!
//! ```
//! use contraction_fix::prelude::*;
//!
//! let fixer = ContractionFixer::new(FixerConfig::default()).unwrap();
//! assert_eq!(fixer.fix("idk, it's fine"), "I do not know, it is fine");
//!
//! fixer.add_contraction("gonna", "going to");
//! assert_eq!(fixer.fix("I'm gonna do it"), "I am going to do it");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod disambiguate;
pub mod error;
pub mod facade;
pub mod fixer;
pub mod matcher;

pub use facade::{contract, contract_batch, fix, fix_batch};

pub mod prelude {
    pub use crate::config::FixerConfig;
    pub use crate::dictionary::{DictionarySource, Vocabulary};
    pub use crate::error::{FixerError, Result};
    pub use crate::fixer::{ContractionFixer, MatchRecord};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
