//! # Utterance Tokens

use core::ops::{Deref, Range};

use crate::language::PosTag;
use crate::text::convert_to_real_spaces;
use crate::types::Vector;
use crate::utterance::{Utterance, UtteranceEntity, UtteranceSlot};

/// Options for [`Token::to_string_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenToStringOptions {
    /// Lowercase the token.
    pub lower_case: bool,

    /// Convert space placeholders to literal spaces.
    pub real_spaces: bool,

    /// Trim surrounding whitespace.
    pub trim: bool,
}

impl Default for TokenToStringOptions {
    fn default() -> Self {
        Self {
            lower_case: false,
            real_spaces: true,
            trim: false,
        }
    }
}

impl TokenToStringOptions {
    /// Sets the lowercase flag.
    pub fn set_lower_case(
        &mut self,
        lower_case: bool,
    ) {
        self.lower_case = lower_case;
    }

    /// Sets the lowercase flag.
    ///
    /// See: [`set_lower_case`](Self::set_lower_case)
    pub fn with_lower_case(
        mut self,
        lower_case: bool,
    ) -> Self {
        self.set_lower_case(lower_case);
        self
    }

    /// Sets the real-spaces flag.
    pub fn set_real_spaces(
        &mut self,
        real_spaces: bool,
    ) {
        self.real_spaces = real_spaces;
    }

    /// Sets the real-spaces flag.
    ///
    /// See: [`set_real_spaces`](Self::set_real_spaces)
    pub fn with_real_spaces(
        mut self,
        real_spaces: bool,
    ) -> Self {
        self.set_real_spaces(real_spaces);
        self
    }

    /// Sets the trim flag.
    pub fn set_trim(
        &mut self,
        trim: bool,
    ) {
        self.trim = trim;
    }

    /// Sets the trim flag.
    ///
    /// See: [`set_trim`](Self::set_trim)
    pub fn with_trim(
        mut self,
        trim: bool,
    ) -> Self {
        self.set_trim(trim);
        self
    }
}

/// One position of an [`Utterance`].
///
/// The owning utterance holds the tokens; fields which depend on the
/// utterance's current state are read through [`UtteranceToken`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Token {
    pub(crate) index: usize,
    pub(crate) value: String,
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) is_word: bool,
    pub(crate) is_space: bool,
    pub(crate) is_bos: bool,
    pub(crate) is_eos: bool,
    pub(crate) vector: Vector,
    pub(crate) pos: PosTag,
}

impl Token {
    /// Position in the owning utterance.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The literal token text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Character offset of the token in the utterance text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the token, in characters.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The character span ``offset..offset + len``.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Is this a word token?
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Is this a whitespace token?
    pub fn is_space(&self) -> bool {
        self.is_space
    }

    /// Is this the first token?
    pub fn is_bos(&self) -> bool {
        self.is_bos
    }

    /// Is this the last token?
    pub fn is_eos(&self) -> bool {
        self.is_eos
    }

    /// The token's vector.
    pub fn vector(&self) -> &[f32] {
        &self.vector
    }

    /// The token's part-of-speech tag.
    pub fn pos(&self) -> PosTag {
        self.pos
    }

    /// Render the token.
    ///
    /// Applies, in order: lowercase, real spaces, trim.
    pub fn to_string_with(
        &self,
        options: &TokenToStringOptions,
    ) -> String {
        let mut result = if options.lower_case {
            self.value.to_lowercase()
        } else {
            self.value.clone()
        };
        if options.real_spaces {
            result = convert_to_real_spaces(&result);
        }
        if options.trim {
            result = result.trim().to_string();
        }
        result
    }
}

/// A [`Token`] viewed through its owning [`Utterance`].
///
/// Derived fields are computed from the utterance's state at read time.
#[derive(Debug, Clone, Copy)]
pub struct UtteranceToken<'a> {
    utterance: &'a Utterance,
    token: &'a Token,
}

impl<'a> Deref for UtteranceToken<'a> {
    type Target = Token;

    fn deref(&self) -> &Token {
        self.token
    }
}

impl<'a> UtteranceToken<'a> {
    pub(crate) fn new(
        utterance: &'a Utterance,
        token: &'a Token,
    ) -> Self {
        Self { utterance, token }
    }

    /// The underlying token.
    pub fn token(&self) -> &'a Token {
        self.token
    }

    /// The owning utterance.
    pub fn utterance(&self) -> &'a Utterance {
        self.utterance
    }

    /// Slots covering this token.
    pub fn slots(&self) -> Vec<&'a UtteranceSlot> {
        self.utterance.slots_for_token(self.token.index)
    }

    /// Entities covering this token.
    pub fn entities(&self) -> Vec<&'a UtteranceEntity> {
        self.utterance.entities_for_token(self.token.index)
    }

    /// The token's TF-IDF weight.
    pub fn tfidf(&self) -> f32 {
        self.utterance.tfidf_for_token(self.token.index)
    }

    /// The token's cluster id.
    pub fn cluster(&self) -> usize {
        self.utterance.cluster_for_token(self.token.index)
    }
}
