//! Dictionary resources and their JSON format.
//!
//! Each dictionary is a flat JSON object mapping a surface form to its
//! expansion:
//!
//! ```json
//! {
//!   "can't": "cannot",
//!   "y'all": "you all"
//! }
//! ```
//!
//! The three dictionaries shipped with the crate are compiled into the
//! binary. A directory holding files with the same names can be used instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FixerError, Result};

const BUNDLED_STANDARD: &str = include_str!("../../data/standard_contractions.json");
const BUNDLED_INFORMAL: &str = include_str!("../../data/informal_contractions.json");
const BUNDLED_SLANG: &str = include_str!("../../data/internet_slang.json");

/// Month names used for the `jan.` → `january` abbreviations.
pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// The three dictionaries a vocabulary is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    /// Standard English contractions (always loaded).
    Standard,
    /// Informal speech forms such as `goin'` or `y'all`.
    Informal,
    /// Internet slang such as `btw` or `idk`.
    Slang,
}

impl DictionaryKind {
    /// File name of this dictionary, both bundled and on disk.
    pub fn resource_name(&self) -> &'static str {
        match self {
            DictionaryKind::Standard => "standard_contractions.json",
            DictionaryKind::Informal => "informal_contractions.json",
            DictionaryKind::Slang => "internet_slang.json",
        }
    }

    fn bundled(&self) -> &'static str {
        match self {
            DictionaryKind::Standard => BUNDLED_STANDARD,
            DictionaryKind::Informal => BUNDLED_INFORMAL,
            DictionaryKind::Slang => BUNDLED_SLANG,
        }
    }
}

/// Where dictionaries are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictionarySource {
    /// The dictionaries compiled into the crate.
    #[default]
    Bundled,
    /// A directory containing the dictionary files by name.
    Directory(PathBuf),
}

impl DictionarySource {
    /// Create a source reading from the given directory.
    pub fn directory<P: AsRef<Path>>(path: P) -> Self {
        DictionarySource::Directory(path.as_ref().to_path_buf())
    }

    /// Load one dictionary as (key, expansion) pairs.
    ///
    /// Keys are returned as written; case folding happens when the
    /// vocabulary is built.
    pub fn load(&self, kind: DictionaryKind) -> Result<Vec<(String, String)>> {
        let resource = kind.resource_name();
        let entries = match self {
            DictionarySource::Bundled => parse_dictionary(resource, kind.bundled())?,
            DictionarySource::Directory(dir) => {
                let path = dir.join(resource);
                let content = fs::read_to_string(&path).map_err(|e| {
                    FixerError::load(resource, format!("cannot read {}: {}", path.display(), e))
                })?;
                parse_dictionary(resource, &content)?
            }
        };

        log::debug!("Loaded {} entries from {}", entries.len(), resource);
        Ok(entries)
    }
}

/// Parse a flat JSON object of string keys to string values.
pub fn parse_dictionary(resource: &str, content: &str) -> Result<Vec<(String, String)>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| FixerError::load(resource, format!("invalid JSON: {}", e)))?;

    let Value::Object(map) = value else {
        return Err(FixerError::load(
            resource,
            "expected a JSON object mapping contractions to expansions",
        ));
    };

    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(expansion) => Ok((key, expansion)),
            other => Err(FixerError::load(
                resource,
                format!("value for '{}' must be a string, found {}", key, other),
            )),
        })
        .collect()
}

/// Three-letter month abbreviations with a trailing period.
pub fn month_abbreviations() -> impl Iterator<Item = (String, String)> {
    MONTHS
        .iter()
        .map(|month| (format!("{}.", &month[..3]), month.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dictionaries_parse() {
        for kind in [
            DictionaryKind::Standard,
            DictionaryKind::Informal,
            DictionaryKind::Slang,
        ] {
            let entries = DictionarySource::Bundled.load(kind).unwrap();
            assert!(!entries.is_empty(), "{} is empty", kind.resource_name());
        }
    }

    #[test]
    fn test_parse_rejects_nested_values() {
        let err = parse_dictionary("test.json", r#"{"can't": {"value": "cannot"}}"#).unwrap_err();
        assert!(err.is_load_error());
        assert!(err.to_string().contains("test.json"));
        assert!(err.to_string().contains("can't"));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_dictionary("list.json", r#"["can't", "cannot"]"#).unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_dictionary("broken.json", r#"{"can't": "cannot""#).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_month_abbreviations() {
        let months: Vec<_> = month_abbreviations().collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], ("jan.".to_string(), "january".to_string()));
        assert_eq!(months[11], ("dec.".to_string(), "december".to_string()));
    }

    #[test]
    fn test_missing_directory_is_load_error() {
        let source = DictionarySource::directory("/nonexistent/contraction-fix");
        let err = source.load(DictionaryKind::Standard).unwrap_err();
        assert!(err.is_load_error());
        assert!(err.to_string().contains("standard_contractions.json"));
    }
}
