//! # Testing Tools

use crate::language::PosTag;
use crate::text::split_special_and_spaces;
use crate::utterance::Utterance;

/// Build an utterance by splitting on special characters and whitespace.
///
/// Every token gets a one-dimensional zero vector and the ``N/A`` tag;
/// the language is ``en``.
///
/// The token, vector and tag lists are built with one length, so
/// construction cannot fail.
pub fn make_test_utterance(text: &str) -> Utterance {
    let tokens = split_special_and_spaces(text);
    let vectors = vec![vec![0.0]; tokens.len()];
    let pos_tags = vec![PosTag::NotAvailable; tokens.len()];
    Utterance::new(tokens, vectors, pos_tags, "en").expect("aligned test utterance")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_test_utterance() {
        let utt = make_test_utterance("hi, there!");
        let values: Vec<&str> = utt.tokens().map(|t| t.token().value()).collect();
        assert_eq!(values, vec!["hi", ",", " ", "there", "!"]);
        assert_eq!(utt.to_string(), "hi, there!");
        assert!(utt.tokens().all(|t| t.pos() == PosTag::NotAvailable));
    }
}
