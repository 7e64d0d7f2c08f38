//! Match records returned by [`ContractionFixer::preview`](crate::fixer::ContractionFixer::preview).

use serde::{Deserialize, Serialize};

/// A single match found while previewing a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The matched text as written in the input.
    #[serde(rename = "match")]
    pub text: String,
    /// Byte offset of the match.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// What `fix` would put in place of the match.
    pub replacement: String,
    /// The match with up to `context_radius` characters on either side.
    pub context: String,
}

impl MatchRecord {
    /// Whether applying this record changes the text.
    pub fn is_change(&self) -> bool {
        self.text != self.replacement
    }
}

/// Slice `text[start..end]` widened by `radius` characters on each side,
/// clipped to the text bounds.
pub(crate) fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .take(radius)
            .last()
            .map_or(start, |(i, _)| i)
    };
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_window() {
        let text = "I can't believe it's not butter!";
        assert_eq!(context_window(text, 2, 7, 10), "I can't believe i");
        assert_eq!(context_window(text, 16, 20, 5), "ieve it's not ");
        assert_eq!(context_window(text, 2, 7, 0), "can't");
    }

    #[test]
    fn test_context_window_multibyte() {
        let text = "é can’t ü";
        let start = text.find("can").unwrap();
        let end = start + "can’t".len();
        assert_eq!(context_window(text, start, end, 2), "é can’t ü");
        assert_eq!(context_window(text, start, end, 1), " can’t ");
    }
}
