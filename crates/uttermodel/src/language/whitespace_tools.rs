//! # Whitespace Language Tools
//!
//! A dependency-free [`LanguageTools`] implementation:
//! * tokenization splits on whitespace and special characters;
//! * tagging only distinguishes spaces, punctuation and numerals;
//! * vectors are hashed character trigrams.
//!
//! Useful for tests and tooling; real deployments plug in trained tools.

use core::hash::BuildHasher;

use foldhash::fast::FixedState;

use crate::errors::UMResult;
use crate::language::{LanguageTools, PosTag};
use crate::text::{is_space, is_special_char, split_special_and_spaces};
use crate::types::{TokenVectorMap, Vector};

/// Default vector dimensionality of [`WhitespaceTools`].
pub const DEFAULT_WHITESPACE_DIMS: usize = 32;

/// Seed of the trigram bucket hasher.
const TRIGRAM_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simple whitespace / special-character language tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceTools {
    dims: usize,
}

impl Default for WhitespaceTools {
    fn default() -> Self {
        Self::new(DEFAULT_WHITESPACE_DIMS)
    }
}

impl WhitespaceTools {
    /// Create tools producing vectors of `dims` dimensions.
    ///
    /// ## Panics
    /// If `dims` is zero.
    pub fn new(dims: usize) -> Self {
        assert!(dims > 0, "vector dimensionality must be positive");
        Self { dims }
    }

    /// The vector dimensionality.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Heuristic tag for a single token.
    pub fn tag_token(token: &str) -> PosTag {
        if is_space(token) {
            PosTag::Space
        } else if !token.is_empty() && token.chars().all(is_special_char) {
            PosTag::Punct
        } else if !token.is_empty() && token.chars().all(|c| c.is_numeric()) {
            PosTag::Num
        } else {
            PosTag::X
        }
    }

    /// Hash the character trigrams of a token into a vector.
    ///
    /// Tokens are lowercased and framed with ``<`` / ``>`` first, so
    /// case variants share a vector.
    pub fn vectorize_token(
        &self,
        token: &str,
    ) -> Vector {
        let mut vector = vec![0.0; self.dims];
        if is_space(token) {
            return vector;
        }

        let hasher = FixedState::with_seed(TRIGRAM_SEED);
        let framed: Vec<char> = format!("<{}>", token.to_lowercase()).chars().collect();
        for gram in framed.windows(3.min(framed.len())) {
            let idx = (hasher.hash_one(gram) % self.dims as u64) as usize;
            vector[idx] += 1.0;
        }
        vector
    }
}

impl LanguageTools for WhitespaceTools {
    fn tokenize_utterances(
        &self,
        utterances: &[String],
        _language: &str,
        _vocab: Option<&TokenVectorMap>,
    ) -> UMResult<Vec<Vec<String>>> {
        Ok(utterances
            .iter()
            .map(|u| split_special_and_spaces(u))
            .collect())
    }

    fn pos_utterances(
        &self,
        tokens: &[Vec<String>],
        _language: &str,
    ) -> UMResult<Vec<Vec<PosTag>>> {
        Ok(tokens
            .iter()
            .map(|toks| toks.iter().map(|t| Self::tag_token(t)).collect())
            .collect())
    }

    fn vectorize_tokens(
        &self,
        tokens: &[String],
        _language: &str,
    ) -> UMResult<Vec<Vector>> {
        Ok(tokens.iter().map(|t| self.vectorize_token(t)).collect())
    }
}
