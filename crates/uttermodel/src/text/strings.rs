//! # String Normalization

use std::sync::LazyLock;

use regex::Regex;

use crate::text::chars::{SPACE, is_special_char};

static CONSECUTIVE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapse every run of whitespace into a single space.
pub fn replace_consecutive_spaces(text: &str) -> String {
    CONSECUTIVE_SPACES.replace_all(text, " ").into_owned()
}

/// Split text into words, single special characters and single whitespace characters.
///
/// Concatenating the pieces yields the input text.
pub fn split_special_and_spaces(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if is_special_char(c) || c.is_whitespace() || c == SPACE {
            if !word.is_empty() {
                pieces.push(std::mem::take(&mut word));
            }
            pieces.push(c.to_string());
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        pieces.push(word);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_consecutive_spaces() {
        assert_eq!(replace_consecutive_spaces("a  b \t\n c"), "a b c");
        assert_eq!(replace_consecutive_spaces("  lead"), " lead");
        assert_eq!(replace_consecutive_spaces("none"), "none");
    }

    #[test]
    fn test_split_special_and_spaces() {
        assert_eq!(
            split_special_and_spaces("hello world"),
            vec!["hello", " ", "world"]
        );
        assert_eq!(
            split_special_and_spaces("hi, bob!"),
            vec!["hi", ",", " ", "bob", "!"]
        );
        assert!(split_special_and_spaces("").is_empty());

        let text = "a  (b)-c";
        assert_eq!(split_special_and_spaces(text).concat(), text);
    }
}
