//! Stateless convenience functions.
//!
//! Each call picks an engine for the requested dictionary selection: the
//! default selection (informal and slang enabled) shares one lazily built
//! engine for the whole process, any other selection builds a fresh engine
//! for the call. The shared engine is never handed out, so its vocabulary
//! cannot be mutated through this module. Callers needing custom
//! vocabularies should own a [`ContractionFixer`] instead.
//!
//! ```
//! assert_eq!(contraction_fix::fix("btw it's cool", true, true).unwrap(), "by the way it is cool");
//! assert_eq!(contraction_fix::fix("btw it's cool", true, false).unwrap(), "btw it is cool");
//! ```

use std::sync::OnceLock;

use crate::config::FixerConfig;
use crate::error::Result;
use crate::fixer::ContractionFixer;

static DEFAULT_FIXER: OnceLock<ContractionFixer> = OnceLock::new();

fn default_fixer() -> Result<&'static ContractionFixer> {
    if let Some(fixer) = DEFAULT_FIXER.get() {
        return Ok(fixer);
    }
    let fixer = ContractionFixer::new(FixerConfig::default())?;
    Ok(DEFAULT_FIXER.get_or_init(|| fixer))
}

fn with_fixer<T>(
    use_informal: bool,
    use_slang: bool,
    f: impl FnOnce(&ContractionFixer) -> T,
) -> Result<T> {
    let config = FixerConfig::new(use_informal, use_slang);
    if config.has_default_dictionaries() {
        Ok(f(default_fixer()?))
    } else {
        Ok(f(&ContractionFixer::new(config)?))
    }
}

/// Expand contractions in `text`.
pub fn fix(text: &str, use_informal: bool, use_slang: bool) -> Result<String> {
    with_fixer(use_informal, use_slang, |fixer| fixer.fix(text))
}

/// Expand contractions in each of `texts`.
pub fn fix_batch<S>(texts: &[S], use_informal: bool, use_slang: bool) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    with_fixer(use_informal, use_slang, |fixer| fixer.fix_batch(texts))
}

/// Contract known expansions in `text`.
pub fn contract(text: &str, use_informal: bool, use_slang: bool) -> Result<String> {
    with_fixer(use_informal, use_slang, |fixer| fixer.contract(text))
}

/// Contract known expansions in each of `texts`.
pub fn contract_batch<S>(texts: &[S], use_informal: bool, use_slang: bool) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    with_fixer(use_informal, use_slang, |fixer| fixer.contract_batch(texts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_is_shared() {
        let first = default_fixer().unwrap() as *const ContractionFixer;
        let second = default_fixer().unwrap() as *const ContractionFixer;
        assert_eq!(first, second);
    }

    #[test]
    fn test_selection_changes_vocabulary() {
        assert_eq!(fix("goin' home", true, true).unwrap(), "going home");
        assert_eq!(fix("goin' home", false, true).unwrap(), "goin' home");
        assert_eq!(fix("idk", true, false).unwrap(), "idk");
        assert_eq!(fix("I can't", false, false).unwrap(), "I cannot");
    }

    #[test]
    fn test_batch_helpers() {
        let texts = vec!["I can't", "they're here"];
        assert_eq!(
            fix_batch(&texts[..], true, true).unwrap(),
            vec!["I cannot", "they are here"]
        );
        assert_eq!(
            contract_batch(&["I cannot", "they are here"], false, false).unwrap(),
            vec!["I can't", "they're here"]
        );
        assert_eq!(contract("it is", true, true).unwrap(), "it's");
    }
}
