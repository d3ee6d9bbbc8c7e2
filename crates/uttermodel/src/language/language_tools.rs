//! # Language Tools Trait

use crate::errors::UMResult;
use crate::language::PosTag;
use crate::types::{TokenVectorMap, Vector};

/// The external tokenizer, tagger and vectorizer used to build utterances.
///
/// Each method is batched; results must align 1:1 with their inputs.
pub trait LanguageTools: Send + Sync {
    /// Tokenize each utterance string.
    ///
    /// ## Arguments
    /// * `utterances` - The clean utterance strings.
    /// * `language` - The language code.
    /// * `vocab` - An optional bot-wide vocabulary the tokenizer may consult.
    ///
    /// ## Returns
    /// One token-string list per input, in input order.
    fn tokenize_utterances(
        &self,
        utterances: &[String],
        language: &str,
        vocab: Option<&TokenVectorMap>,
    ) -> UMResult<Vec<Vec<String>>>;

    /// Tag each token list with parts of speech.
    ///
    /// ## Returns
    /// One tag list per input, each as long as its token list.
    fn pos_utterances(
        &self,
        tokens: &[Vec<String>],
        language: &str,
    ) -> UMResult<Vec<Vec<PosTag>>>;

    /// Vectorize distinct token strings.
    ///
    /// ## Returns
    /// One vector per input token, in input order.
    fn vectorize_tokens(
        &self,
        tokens: &[String],
        language: &str,
    ) -> UMResult<Vec<Vector>>;
}
