// Tokenizer — raw text to normalized word occurrences with offsets.
//
// The text is split on a single separator character. Each raw token is
// normalized (punctuation stripped, lowercased) and, if anything is left,
// emitted together with the character offset where the raw token starts in
// the original text. Offsets always refer to the unnormalized input, so the
// distance between two occurrences reflects the real spacing in the chapter.

use std::str::Split;

use serde::{Deserialize, Serialize};

/// One normalized appearance of a word at a character offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordOccurrence {
    /// Lowercase, alphanumeric-and-space only. Never empty.
    pub text: String,
    /// Character index of the raw token's first character in the source text.
    pub offset: usize,
}

impl WordOccurrence {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// Strip every character that is neither alphanumeric nor a space.
///
/// Case is left untouched; `normalize` does the lowercasing.
pub fn remove_special_characters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect()
}

/// Normalize a raw token: special characters removed, then lowercased.
pub fn normalize(token: &str) -> String {
    remove_special_characters(token).to_lowercase()
}

/// Iterator over the word occurrences of a text.
///
/// Produced by [`tokenize`]. It is a single left-to-right pass; call
/// `tokenize` again to rescan.
pub struct Tokens<'a> {
    raw: Split<'a, char>,
    /// Character offset of the next raw token.
    cursor: usize,
}

impl Iterator for Tokens<'_> {
    type Item = WordOccurrence;

    fn next(&mut self) -> Option<WordOccurrence> {
        for raw in self.raw.by_ref() {
            let offset = self.cursor;
            // Skip past the raw token and the separator that ended it.
            self.cursor += raw.chars().count() + 1;

            let text = normalize(raw);
            if !text.is_empty() {
                return Some(WordOccurrence { text, offset });
            }
        }
        None
    }
}

/// Split `text` on `separator` and yield the normalized, non-empty tokens.
///
/// Empty fields (consecutive separators, a trailing separator) and tokens
/// made only of punctuation are dropped but still advance the offset.
pub fn tokenize(text: &str, separator: char) -> Tokens<'_> {
    Tokens {
        raw: text.split(separator),
        cursor: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str, separator: char) -> Vec<(String, usize)> {
        tokenize(text, separator)
            .map(|w| (w.text, w.offset))
            .collect()
    }

    #[test]
    fn test_tokenize_sentence() {
        let words: Vec<WordOccurrence> = tokenize("Hello, World! This is a test.", ' ').collect();
        assert_eq!(
            words,
            vec![
                WordOccurrence::new("hello", 0),
                WordOccurrence::new("world", 7),
                WordOccurrence::new("this", 14),
                WordOccurrence::new("is", 19),
                WordOccurrence::new("a", 22),
                WordOccurrence::new("test", 24),
            ]
        );
    }

    #[test]
    fn test_remove_special_characters() {
        assert_eq!(
            remove_special_characters("Hello, World! This is a test."),
            "Hello World This is a test"
        );
    }

    #[test]
    fn test_single_token_without_separator() {
        assert_eq!(pairs("Battle!", ' '), vec![("battle".to_string(), 0)]);
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(
            pairs("war peace ", ' '),
            vec![("war".to_string(), 0), ("peace".to_string(), 4)]
        );
    }

    #[test]
    fn test_punctuation_only_token_advances_offset() {
        // "--" normalizes to nothing but still occupies positions 4..6
        assert_eq!(
            pairs("war -- peace", ' '),
            vec![("war".to_string(), 0), ("peace".to_string(), 7)]
        );
    }

    #[test]
    fn test_consecutive_separators() {
        assert_eq!(
            pairs("a  b", ' '),
            vec![("a".to_string(), 0), ("b".to_string(), 3)]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(pairs("", ' ').is_empty());
    }

    #[test]
    fn test_offsets_count_characters() {
        // "Café" is 4 characters but 5 bytes
        assert_eq!(
            pairs("Café war", ' '),
            vec![("café".to_string(), 0), ("war".to_string(), 5)]
        );
    }

    #[test]
    fn test_non_space_separator_keeps_spaces() {
        assert_eq!(
            pairs("Hello World,Again", ','),
            vec![("hello world".to_string(), 0), ("again".to_string(), 12)]
        );
    }

    #[test]
    fn test_rescan_is_identical() {
        let text = "The war, the war.";
        let first: Vec<_> = tokenize(text, ' ').collect();
        let second: Vec<_> = tokenize(text, ' ').collect();
        assert_eq!(first, second);
    }
}
