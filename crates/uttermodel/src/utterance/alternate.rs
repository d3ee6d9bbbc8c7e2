//! # Out-of-Vocabulary Alternates
//!
//! Augmentation: an alternate utterance swaps out-of-vocabulary words for
//! their closest in-vocabulary neighbour.

use crate::errors::UMResult;
use crate::language::PosTag;
use crate::text::is_word;
use crate::types::{TokenVectorMap, Vector};
use crate::utterance::{TokenToStringOptions, Utterance, UtteranceToken};
use crate::vocab::NearestToken;

/// Default minimum length (exclusive) of substituted tokens.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 3;

/// Options for [`get_alternate_utterance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateOptions {
    /// Both the original and the substitute must be longer than this.
    pub min_token_chars: usize,

    /// Passed through to [`NearestToken::nearest_vocab_token`].
    pub strict: bool,
}

impl Default for AlternateOptions {
    fn default() -> Self {
        Self {
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            strict: false,
        }
    }
}

impl AlternateOptions {
    /// Sets the minimum token length.
    pub fn set_min_token_chars(
        &mut self,
        min_token_chars: usize,
    ) {
        self.min_token_chars = min_token_chars;
    }

    /// Sets the minimum token length.
    ///
    /// See: [`set_min_token_chars`](Self::set_min_token_chars)
    pub fn with_min_token_chars(
        mut self,
        min_token_chars: usize,
    ) -> Self {
        self.set_min_token_chars(min_token_chars);
        self
    }

    /// Sets the strict lookup flag.
    pub fn set_strict(
        &mut self,
        strict: bool,
    ) {
        self.strict = strict;
    }

    /// Sets the strict lookup flag.
    ///
    /// See: [`set_strict`](Self::set_strict)
    pub fn with_strict(
        mut self,
        strict: bool,
    ) -> Self {
        self.set_strict(strict);
        self
    }
}

struct AlternateToken {
    value: String,
    vector: Vector,
    pos: PosTag,
}

impl AlternateToken {
    fn keep(token: &UtteranceToken<'_>) -> Self {
        Self {
            value: token.to_string_with(&TokenToStringOptions::default()),
            vector: token.vector().to_vec(),
            pos: token.pos(),
        }
    }
}

/// Build an alternate utterance with out-of-vocabulary words replaced.
///
/// Words already in `vocab` (lowercased), and entity-tagged words, are
/// kept. A substitute is only accepted when it is a word and both it and
/// the original are longer than `min_token_chars`.
///
/// ## Returns
/// `Ok(None)` when no token was substituted.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(utterance, vocab, nearest, options))
)]
pub fn get_alternate_utterance<N>(
    utterance: &Utterance,
    vocab: &TokenVectorMap,
    nearest: &N,
    options: &AlternateOptions,
) -> UMResult<Option<Utterance>>
where
    N: NearestToken + ?Sized,
{
    let lower = TokenToStringOptions::default().with_lower_case(true);
    let mut substituted = 0;

    let alternates: Vec<AlternateToken> = utterance
        .tokens()
        .map(|token| {
            let query = token.to_string_with(&lower);
            if !token.is_word() || vocab.contains_key(&query) || !token.entities().is_empty() {
                return AlternateToken::keep(&token);
            }

            let candidate = nearest
                .nearest_vocab_token(&query, token.vector(), vocab, options.strict)
                .filter(|c| {
                    is_word(c)
                        && token.len() > options.min_token_chars
                        && c.chars().count() > options.min_token_chars
                })
                .and_then(|c| vocab.get(&c).map(|v| (c, v)));

            match candidate {
                Some((value, vector)) => {
                    log::trace!("Substituting {:?} with {:?}", token.value(), value);
                    substituted += 1;
                    AlternateToken {
                        value,
                        vector: vector.clone(),
                        pos: token.pos(),
                    }
                }
                None => AlternateToken::keep(&token),
            }
        })
        .collect();

    if substituted == 0 {
        return Ok(None);
    }

    let mut values = Vec::with_capacity(alternates.len());
    let mut vectors = Vec::with_capacity(alternates.len());
    let mut pos_tags = Vec::with_capacity(alternates.len());
    for alt in alternates {
        values.push(alt.value);
        vectors.push(alt.vector);
        pos_tags.push(alt.pos);
    }

    Utterance::new(values, vectors, pos_tags, utterance.language_code()).map(Some)
}
