//! # Token Character Classes

/// Placeholder character some tokenizers emit in place of a literal space.
pub const SPACE: char = '\u{2581}';

/// Characters which never occur inside a word token.
pub const SPECIAL_CHARSET: &[char] = &[
    '¿', '÷', '≥', '≤', 'µ', '˜', '∫', '√', '≈', 'æ', '…', '¬', '˚', '˙', '©', '+', '-', '_', '!',
    '@', '#', '$', '%', '?', '&', '*', '(', ')', '/', '\\', '[', ']', '{', '}', ':', ';', '<', '>',
    '=', '.', ',', '~', '`', '"', '\'',
];

/// Is this character a member of [`SPECIAL_CHARSET`]?
pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARSET.contains(&c)
}

/// Is this character a literal space or the [`SPACE`] placeholder?
pub fn is_space_char(c: char) -> bool {
    c == ' ' || c == SPACE
}

/// Is the token made only of spaces?
///
/// The empty string is not a space token.
pub fn is_space(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_space_char)
}

/// Does the token contain any space character?
pub fn has_space(token: &str) -> bool {
    token.chars().any(is_space_char)
}

/// Is the token a word?
///
/// A word holds no special characters and no spaces.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(|c| is_special_char(c) || is_space_char(c))
}

/// Replace every [`SPACE`] placeholder with a literal space.
pub fn convert_to_real_spaces(text: &str) -> String {
    text.replace(SPACE, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_word() {
        assert!(is_word("hello"));
        assert!(is_word("café"));
        assert!(is_word("42"));
        assert!(!is_word("hello!"));
        assert!(!is_word(" "));
        assert!(!is_word("\u{2581}hello"));
        assert!(!is_word(""));
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(" "));
        assert!(is_space("  "));
        assert!(is_space("\u{2581}"));
        assert!(!is_space(" a"));
        assert!(!is_space(""));

        assert!(has_space("a b"));
        assert!(!has_space("ab"));
    }

    #[test]
    fn test_convert_to_real_spaces() {
        assert_eq!(convert_to_real_spaces("\u{2581}hello\u{2581}"), " hello ");
        assert_eq!(convert_to_real_spaces("plain"), "plain");
    }
}
