//! # Utterance Batch Builder
//!
//! Builds utterances from raw strings with an external [`LanguageTools`]:
//! 1. normalize whitespace and parse inline slot markup;
//! 2. tokenize, then tag, every clean string;
//! 3. vectorize each distinct token string once;
//! 4. build one utterance per non-empty tokenization, re-attaching the
//!    parsed slots when the token text still lines up with the clean text.

use crate::errors::{UMResult, UtteranceError};
use crate::language::{LanguageTools, PosTag};
use crate::text::replace_consecutive_spaces;
use crate::types::{TokenVectorMap, UMHashMap, UMHashSet, hash_map_with_capacity};
use crate::utterance::{ExtractedSlot, ParsedUtterance, Utterance, parse_utterance};

/// Options for [`build_utterance_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOptions {
    parallel: bool,
}

impl BatchOptions {
    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism builds utterances on the ``rayon`` pool;
    /// without the ``rayon`` feature this is ignored.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// See: [`set_parallel`](Self::set_parallel)
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }
}

fn check_aligned(
    stage: &'static str,
    expected: usize,
    actual: usize,
) -> UMResult<()> {
    if expected != actual {
        return Err(UtteranceError::BatchMisaligned {
            stage,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Build a batch of utterances from raw strings.
///
/// Inputs which tokenize to nothing are dropped; the result may be shorter
/// than `raw_utterances`, but keeps input order.
///
/// ## Arguments
/// * `raw_utterances` - Authored text, possibly with ``[value](slot)`` markup.
/// * `language` - The language code.
/// * `tools` - The tokenizer / tagger / vectorizer.
/// * `vocab` - An optional bot-wide vocabulary, passed to the tokenizer.
/// * `options` - Batch options.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(raw_utterances, tools, vocab, options))
)]
pub fn build_utterance_batch<S, L>(
    raw_utterances: &[S],
    language: &str,
    tools: &L,
    vocab: Option<&TokenVectorMap>,
    options: &BatchOptions,
) -> UMResult<Vec<Utterance>>
where
    S: AsRef<str>,
    L: LanguageTools + ?Sized,
{
    let parsed: Vec<ParsedUtterance> = raw_utterances
        .iter()
        .map(|raw| parse_utterance(&replace_consecutive_spaces(raw.as_ref())))
        .collect();

    let clean: Vec<String> = parsed.iter().map(|p| p.utterance.clone()).collect();
    let token_utterances = tools.tokenize_utterances(&clean, language, vocab)?;
    check_aligned("tokenize", clean.len(), token_utterances.len())?;

    let pos_utterances = tools.pos_utterances(&token_utterances, language)?;
    check_aligned("pos", token_utterances.len(), pos_utterances.len())?;

    let mut seen: UMHashSet<&str> = UMHashSet::default();
    let unique_tokens: Vec<String> = token_utterances
        .iter()
        .flatten()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect();

    let vectors = tools.vectorize_tokens(&unique_tokens, language)?;
    check_aligned("vectorize", unique_tokens.len(), vectors.len())?;

    let mut vector_map: UMHashMap<&str, &[f32]> = hash_map_with_capacity(unique_tokens.len());
    for (token, vector) in unique_tokens.iter().zip(&vectors) {
        vector_map.insert(token.as_str(), vector.as_slice());
    }

    let items: Vec<(&Vec<String>, &Vec<PosTag>, &ParsedUtterance)> = token_utterances
        .iter()
        .zip(&pos_utterances)
        .zip(&parsed)
        .map(|((tokens, tags), parsed)| (tokens, tags, parsed))
        .filter(|(tokens, _, _)| !tokens.is_empty())
        .collect();

    let dropped = parsed.len() - items.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} utterances with no tokens");
    }

    let build = |(tokens, tags, parsed): &(&Vec<String>, &Vec<PosTag>, &ParsedUtterance)| {
        build_one(tokens, tags, parsed, &vector_map, language)
    };

    #[cfg(feature = "rayon")]
    {
        if options.parallel() {
            use rayon::prelude::*;
            return items.par_iter().map(build).collect();
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = options;

    items.iter().map(build).collect()
}

fn build_one(
    tokens: &[String],
    tags: &[PosTag],
    parsed: &ParsedUtterance,
    vector_map: &UMHashMap<&str, &[f32]>,
    language: &str,
) -> UMResult<Utterance> {
    let vectors = tokens
        .iter()
        .map(|t| {
            vector_map
                .get(t.as_str())
                .map(|v| v.to_vec())
                .ok_or_else(|| UtteranceError::MissingVector(t.clone()))
        })
        .collect::<UMResult<Vec<_>>>()?;

    let mut utterance = Utterance::new(tokens.to_vec(), vectors, tags.to_vec(), language)?;

    // Tokenizers may not reproduce the clean text exactly (e.g. a trailing
    // space inside a slot at the end of the utterance); slots are only safe
    // to attach when the lengths agree.
    let clean_len = parsed.utterance.chars().count();
    if utterance.to_string().chars().count() != clean_len {
        if !parsed.parsed_slots.is_empty() {
            log::info!(
                "Skipping {} slots of misaligned utterance {:?}",
                parsed.parsed_slots.len(),
                parsed.utterance
            );
        }
        return Ok(utterance);
    }

    for slot in &parsed.parsed_slots {
        utterance.tag_slot(
            ExtractedSlot::from_source(slot.name.clone(), slot.value.clone(), 1.0),
            slot.clean_position.start,
            slot.clean_position.end,
        )?;
    }

    Ok(utterance)
}
