//! # Error Types

/// Errors from uttermodel operations.
#[derive(Debug, thiserror::Error)]
pub enum UtteranceError {
    /// The parallel token / vector / part-of-speech inputs differ in length.
    #[error(
        "tokens ({tokens}), vectors ({vectors}) and pos tags ({pos_tags}) dimensions must match"
    )]
    DimensionMismatch {
        /// Number of token strings.
        tokens: usize,

        /// Number of token vectors.
        vectors: usize,

        /// Number of part-of-speech tags.
        pos_tags: usize,
    },

    /// A token vector's length differs from the first token's.
    #[error("token {index} has {actual} vector dims; expected {expected}")]
    VectorDimsMismatch {
        /// The offending token index.
        index: usize,

        /// The dimensionality of the first token's vector.
        expected: usize,

        /// The dimensionality of the offending vector.
        actual: usize,
    },

    /// A character range is malformed or out of the utterance's bounds.
    #[error("invalid range [{start}, {end}) for utterance of length {max_end}")]
    InvalidRange {
        /// The requested start position.
        start: usize,

        /// The requested end position.
        end: usize,

        /// The length of the reconstructed utterance text.
        max_end: usize,
    },

    /// A token had no vector in the batch lookup table.
    #[error("no vector for token {0:?}")]
    MissingVector(String),

    /// A collaborator returned a result of the wrong length.
    #[error("{stage}: expected {expected} results, got {actual}")]
    BatchMisaligned {
        /// The pipeline stage which misbehaved.
        stage: &'static str,

        /// The expected number of results.
        expected: usize,

        /// The actual number of results.
        actual: usize,
    },

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for uttermodel operations.
pub type UMResult<T> = core::result::Result<T, UtteranceError>;
