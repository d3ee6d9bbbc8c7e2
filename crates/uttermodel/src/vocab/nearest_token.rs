//! # Nearest Vocabulary Token

use core::cmp::Ordering;

use crate::text::math::euclidean_distance;
use crate::types::TokenVectorMap;

/// Nearest-neighbour lookup into a vocabulary.
pub trait NearestToken: Send + Sync {
    /// Find the vocabulary token closest to a query.
    ///
    /// ## Arguments
    /// * `query` - The (lowercased) query token.
    /// * `vector` - The query token's vector.
    /// * `vocab` - The vocabulary to search.
    /// * `strict` - Restrict the search to spelling neighbours.
    ///
    /// ## Returns
    /// The closest token, or `None` when nothing qualifies.
    fn nearest_vocab_token(
        &self,
        query: &str,
        vector: &[f32],
        vocab: &TokenVectorMap,
        strict: bool,
    ) -> Option<String>;
}

/// Default maximum edit distance of [`ClosestTokenFinder`].
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 3;

/// Closest-token lookup by spelling, then by meaning.
///
/// Vocabulary tokens within `max_edit_distance` Levenshtein edits of the
/// query win, closest first. Otherwise, unless the lookup is strict, the
/// token with the Euclidean-nearest vector wins.
///
/// Ties break on the lexicographically smallest token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestTokenFinder {
    /// Maximum Levenshtein distance for a spelling match.
    pub max_edit_distance: usize,
}

impl Default for ClosestTokenFinder {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

impl ClosestTokenFinder {
    /// Sets the maximum edit distance.
    pub fn with_max_edit_distance(
        mut self,
        max_edit_distance: usize,
    ) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }
}

fn closer<'a, D: PartialOrd>(
    best: Option<(D, &'a str)>,
    candidate: (D, &'a str),
) -> Option<(D, &'a str)> {
    match best {
        None => Some(candidate),
        Some(best) => match candidate.0.partial_cmp(&best.0) {
            Some(Ordering::Less) => Some(candidate),
            Some(Ordering::Equal) if candidate.1 < best.1 => Some(candidate),
            _ => Some(best),
        },
    }
}

impl NearestToken for ClosestTokenFinder {
    fn nearest_vocab_token(
        &self,
        query: &str,
        vector: &[f32],
        vocab: &TokenVectorMap,
        strict: bool,
    ) -> Option<String> {
        let mut by_spelling: Option<(usize, &str)> = None;
        let mut by_meaning: Option<(f32, &str)> = None;

        for (token, token_vector) in vocab.iter() {
            let edits = strsim::levenshtein(query, token);
            if edits <= self.max_edit_distance {
                by_spelling = closer(by_spelling, (edits, token.as_str()));
            }
            if !strict {
                let distance = euclidean_distance(vector, token_vector);
                if distance.is_finite() {
                    by_meaning = closer(by_meaning, (distance, token.as_str()));
                }
            }
        }

        by_spelling
            .map(|(_, t)| t)
            .or(by_meaning.map(|(_, t)| t))
            .map(str::to_string)
    }
}
