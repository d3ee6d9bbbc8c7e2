//! # Utterance

use core::fmt::{Display, Formatter};
use std::sync::{Arc, OnceLock};

use crate::errors::{UMResult, UtteranceError};
use crate::language::PosTag;
use crate::text::math::{add_scaled, compute_norm};
use crate::text::{convert_to_real_spaces, is_space, is_word};
use crate::types::{TfidfTable, Vector};
use crate::utterance::ranges::tag_range;
use crate::utterance::{
    EntityStringMode,
    ExtractedEntity,
    ExtractedSlot,
    SlotStringMode,
    Token,
    UtteranceEntity,
    UtteranceSlot,
    UtteranceToStringOptions,
    UtteranceToken,
};
use crate::vocab::ClusterModel;

/// TF-IDF weight of a token with no table entry.
pub const DEFAULT_TFIDF: f32 = 1.0;

/// Cluster id of a token when no clustering model is set.
pub const DEFAULT_CLUSTER: usize = 1;

/// The structured representation of one input sentence.
///
/// An utterance owns a fixed sequence of [`Token`]s, plus the slots and
/// entities tagged onto them. Token-derived fields (slots, entities,
/// TF-IDF, cluster) are read through [`UtteranceToken`] and always reflect
/// the utterance's current state.
///
/// The TF-IDF table and clustering model should be set before any reads;
/// the sentence embedding is computed once, on first access, and is never
/// recomputed.
#[derive(Debug)]
pub struct Utterance {
    language_code: String,
    tokens: Vec<Token>,
    slots: Vec<UtteranceSlot>,
    entities: Vec<UtteranceEntity>,
    global_tfidf: Option<TfidfTable>,
    kmeans: Option<Arc<dyn ClusterModel>>,
    sentence_embedding: OnceLock<Vector>,
}

impl Utterance {
    /// Build an utterance from parallel token / vector / tag lists.
    ///
    /// ## Arguments
    /// * `tokens` - The token strings, in text order.
    /// * `vectors` - One vector per token; all of one dimensionality.
    /// * `pos_tags` - One part-of-speech tag per token.
    /// * `language_code` - The utterance language.
    ///
    /// ## Returns
    /// The utterance, or a [`UtteranceError::DimensionMismatch`] when the
    /// lists differ in length.
    pub fn new<S: Into<String>>(
        tokens: Vec<S>,
        vectors: Vec<Vector>,
        pos_tags: Vec<PosTag>,
        language_code: impl Into<String>,
    ) -> UMResult<Self> {
        if tokens.len() != vectors.len() || tokens.len() != pos_tags.len() {
            return Err(UtteranceError::DimensionMismatch {
                tokens: tokens.len(),
                vectors: vectors.len(),
                pos_tags: pos_tags.len(),
            });
        }

        let dims = vectors.first().map_or(0, Vec::len);
        if let Some(index) = vectors.iter().position(|v| v.len() != dims) {
            return Err(UtteranceError::VectorDimsMismatch {
                index,
                expected: dims,
                actual: vectors[index].len(),
            });
        }

        let last = tokens.len().saturating_sub(1);
        let mut offset = 0;
        let tokens = tokens
            .into_iter()
            .zip(vectors)
            .zip(pos_tags)
            .enumerate()
            .map(|(index, ((value, vector), pos))| {
                let value: String = value.into();
                let len = value.chars().count();
                let token = Token {
                    index,
                    offset,
                    len,
                    is_word: is_word(&value),
                    is_space: is_space(&value),
                    is_bos: index == 0,
                    is_eos: index == last,
                    value,
                    vector,
                    pos,
                };
                offset += len;
                token
            })
            .collect();

        Ok(Self {
            language_code: language_code.into(),
            tokens,
            slots: Vec::new(),
            entities: Vec::new(),
            global_tfidf: None,
            kmeans: None,
            sentence_embedding: OnceLock::new(),
        })
    }

    /// The utterance language.
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Does the utterance have no tokens?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The bare tokens, without derived fields.
    pub fn raw_tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the tokens, with derived fields.
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = UtteranceToken<'_>> + '_ {
        self.tokens.iter().map(|t| UtteranceToken::new(self, t))
    }

    /// The token at `index`, with derived fields.
    pub fn token(
        &self,
        index: usize,
    ) -> Option<UtteranceToken<'_>> {
        self.tokens.get(index).map(|t| UtteranceToken::new(self, t))
    }

    /// The tagged slots, in tagging order.
    pub fn slots(&self) -> &[UtteranceSlot] {
        &self.slots
    }

    /// The tagged entities, in tagging order.
    pub fn entities(&self) -> &[UtteranceEntity] {
        &self.entities
    }

    /// The slots covering the token at `index`.
    pub fn slots_for_token(
        &self,
        index: usize,
    ) -> Vec<&UtteranceSlot> {
        self.slots
            .iter()
            .filter(|s| s.range.covers_token(index))
            .collect()
    }

    /// The entities covering the token at `index`.
    pub fn entities_for_token(
        &self,
        index: usize,
    ) -> Vec<&UtteranceEntity> {
        self.entities
            .iter()
            .filter(|e| e.range.covers_token(index))
            .collect()
    }

    /// The TF-IDF weight of the token at `index`.
    ///
    /// [`DEFAULT_TFIDF`] when no table is set or the token is absent from it.
    /// Stored weights are returned as stored; a stored ``0.0`` stays ``0.0``.
    pub fn tfidf_for_token(
        &self,
        index: usize,
    ) -> f32 {
        self.global_tfidf
            .as_ref()
            .zip(self.tokens.get(index))
            .and_then(|(table, token)| table.get(&token.value).copied())
            .unwrap_or(DEFAULT_TFIDF)
    }

    /// The cluster id of the token at `index`.
    ///
    /// [`DEFAULT_CLUSTER`] when no clustering model is set.
    pub fn cluster_for_token(
        &self,
        index: usize,
    ) -> usize {
        self.kmeans
            .as_ref()
            .zip(self.tokens.get(index))
            .and_then(|(model, token)| model.nearest(&token.vector))
            .unwrap_or(DEFAULT_CLUSTER)
    }

    /// The global TF-IDF table, if set.
    pub fn global_tfidf(&self) -> Option<&TfidfTable> {
        self.global_tfidf.as_ref()
    }

    /// Set the global TF-IDF table.
    pub fn set_global_tfidf(
        &mut self,
        tfidf: TfidfTable,
    ) {
        self.global_tfidf = Some(tfidf);
    }

    /// The clustering model, if set.
    pub fn kmeans(&self) -> Option<&Arc<dyn ClusterModel>> {
        self.kmeans.as_ref()
    }

    /// Set (or clear) the clustering model.
    pub fn set_kmeans(
        &mut self,
        kmeans: Option<Arc<dyn ClusterModel>>,
    ) {
        self.kmeans = kmeans;
    }

    /// Length of the utterance text, in characters.
    pub fn text_len(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.offset + t.len)
    }

    /// The dimensionality of the token vectors.
    pub fn dims(&self) -> usize {
        self.tokens.first().map_or(0, |t| t.vector.len())
    }

    /// The sentence embedding; computed on first access.
    ///
    /// A TF-IDF weighted average of the unit vectors of the word tokens,
    /// with weights capped at 1. Non-words and zero vectors are skipped.
    /// When nothing contributes, the embedding is the zero vector.
    pub fn sentence_embedding(&self) -> &[f32] {
        self.sentence_embedding
            .get_or_init(|| self.compute_sentence_embedding())
    }

    fn compute_sentence_embedding(&self) -> Vector {
        let mut embedding = vec![0.0; self.dims()];
        let mut total_weight = 0.0;

        for token in self.tokens() {
            let norm = compute_norm(token.vector());
            if norm <= 0.0 || !token.is_word() {
                continue;
            }

            let weight = token.tfidf().min(1.0);
            total_weight += weight;
            add_scaled(&mut embedding, token.vector(), weight / norm);
        }

        if total_weight != 0.0 {
            for x in embedding.iter_mut() {
                *x /= total_weight;
            }
        }
        embedding
    }

    /// Render the utterance as text.
    ///
    /// Slot handling takes precedence over entity handling for tokens
    /// carrying both.
    pub fn to_string_with(
        &self,
        options: &UtteranceToStringOptions,
    ) -> String {
        let mut result = String::new();

        for token in self.tokens() {
            let slots = token.slots();
            let entities = token.entities();
            if options.only_words && slots.is_empty() && entities.is_empty() && !token.is_word() {
                continue;
            }

            if let Some(slot) = slots.first() {
                match options.slots {
                    SlotStringMode::KeepName => {
                        result.push_str(&slot.payload.name);
                        continue;
                    }
                    SlotStringMode::KeepValue => {
                        result.push_str(token.value());
                        continue;
                    }
                    SlotStringMode::Ignore => {}
                }
            }

            match entities.first() {
                Some(entity) => match options.entities {
                    EntityStringMode::KeepName => result.push_str(&entity.payload.entity_type),
                    EntityStringMode::KeepValue => {
                        result.push_str(&entity.payload.value_string())
                    }
                    EntityStringMode::KeepDefault => result.push_str(token.value()),
                    EntityStringMode::Ignore => {}
                },
                None if slots.is_empty() => result.push_str(token.value()),
                None => {}
            }
        }

        let result = convert_to_real_spaces(&result);
        if options.lower_case {
            result.to_lowercase()
        } else {
            result
        }
    }

    /// Tag a slot over the ``[start, end)`` character range.
    ///
    /// ## Returns
    /// `Ok(true)` if tagged; `Ok(false)` if the range covers no whole token;
    /// [`UtteranceError::InvalidRange`] for a malformed range.
    pub fn tag_slot(
        &mut self,
        slot: ExtractedSlot,
        start: usize,
        end: usize,
    ) -> UMResult<bool> {
        match tag_range(&self.tokens, self.text_len(), slot, start, end)? {
            Some(tagged) => {
                self.slots.push(tagged);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Tag an entity over the ``[start, end)`` character range.
    ///
    /// See [`Utterance::tag_slot`].
    pub fn tag_entity(
        &mut self,
        entity: ExtractedEntity,
        start: usize,
        end: usize,
    ) -> UMResult<bool> {
        match tag_range(&self.tokens, self.text_len(), entity, start, end)? {
            Some(tagged) => {
                self.entities.push(tagged);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Build an independent copy of this utterance.
    ///
    /// Tokens are rebuilt from their values, vectors and tags; the TF-IDF
    /// table is copied; the clustering model is not. Entities and slots are
    /// optionally re-tagged from their character positions.
    pub fn clone_with(
        &self,
        copy_entities: bool,
        copy_slots: bool,
    ) -> UMResult<Utterance> {
        let mut utterance = Utterance::new(
            self.tokens.iter().map(|t| t.value.clone()).collect(),
            self.tokens.iter().map(|t| t.vector.clone()).collect(),
            self.tokens.iter().map(|t| t.pos).collect(),
            self.language_code.clone(),
        )?;
        utterance.global_tfidf = self.global_tfidf.clone();

        if copy_entities {
            for entity in &self.entities {
                utterance.tag_entity(
                    entity.payload.clone(),
                    entity.range.start_pos,
                    entity.range.end_pos,
                )?;
            }
        }

        if copy_slots {
            for slot in &self.slots {
                utterance.tag_slot(
                    slot.payload.clone(),
                    slot.range.start_pos,
                    slot.range.end_pos,
                )?;
            }
        }

        Ok(utterance)
    }

    /// A serializable view of the utterance.
    pub fn snapshot(&self) -> UtteranceSnapshot<'_> {
        UtteranceSnapshot {
            language: &self.language_code,
            text: self.to_string(),
            tokens: self
                .tokens()
                .map(|t| TokenSnapshot {
                    token: t.token(),
                    tfidf: t.tfidf(),
                    cluster: t.cluster(),
                })
                .collect(),
            slots: &self.slots,
            entities: &self.entities,
        }
    }
}

impl Display for Utterance {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.to_string_with(&UtteranceToStringOptions::default()))
    }
}

/// A token with its derived fields, for serialization.
#[derive(Debug, serde::Serialize)]
pub struct TokenSnapshot<'a> {
    /// The token.
    #[serde(flatten)]
    pub token: &'a Token,

    /// The token's TF-IDF weight.
    pub tfidf: f32,

    /// The token's cluster id.
    pub cluster: usize,
}

/// An utterance, for serialization.
#[derive(Debug, serde::Serialize)]
pub struct UtteranceSnapshot<'a> {
    /// The utterance language.
    pub language: &'a str,

    /// The default rendering of the utterance.
    pub text: String,

    /// The tokens.
    pub tokens: Vec<TokenSnapshot<'a>>,

    /// The tagged slots.
    pub slots: &'a [UtteranceSlot],

    /// The tagged entities.
    pub entities: &'a [UtteranceEntity],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_test_utterance;
    use crate::types::check_is_send;
    use crate::vocab::CentroidModel;

    fn entity(
        entity_type: &str,
        value: serde_json::Value,
    ) -> ExtractedEntity {
        ExtractedEntity {
            entity_type: entity_type.to_string(),
            value,
            confidence: 1.0,
            metadata: serde_json::Value::Null,
        }
    }

    fn slot(name: &str) -> ExtractedSlot {
        ExtractedSlot::from_source(name, "", 1.0)
    }

    /// Build a "hello world"-shaped utterance with 2-dim vectors.
    fn vectored(
        tokens: &[&str],
        vectors: &[[f32; 2]],
    ) -> Utterance {
        Utterance::new(
            tokens.to_vec(),
            vectors.iter().map(|v| v.to_vec()).collect(),
            vec![PosTag::NotAvailable; tokens.len()],
            "en",
        )
        .unwrap()
    }

    #[test]
    fn test_is_send() {
        check_is_send(make_test_utterance("hello"));
    }

    #[test]
    fn test_construction() {
        let utt = Utterance::new(
            vec!["hello", " ", "world"],
            vec![vec![1.0], vec![0.0], vec![2.0]],
            vec![PosTag::Intj, PosTag::Space, PosTag::Noun],
            "en",
        )
        .unwrap();

        assert_eq!(utt.len(), 3);
        assert!(!utt.is_empty());
        assert_eq!(utt.language_code(), "en");
        assert_eq!(utt.dims(), 1);
        assert_eq!(utt.text_len(), 11);

        let tokens: Vec<_> = utt.tokens().collect();
        assert_eq!(tokens[0].value(), "hello");
        assert_eq!(tokens[0].offset(), 0);
        assert!(tokens[0].is_bos());
        assert!(!tokens[0].is_eos());
        assert!(tokens[0].is_word());

        assert_eq!(tokens[1].offset(), 5);
        assert!(tokens[1].is_space());
        assert!(!tokens[1].is_word());
        assert_eq!(tokens[1].pos(), PosTag::Space);

        assert_eq!(tokens[2].offset(), 6);
        assert!(tokens[2].is_eos());
        assert_eq!(tokens[2].vector(), &[2.0]);
        assert_eq!(tokens[2].index(), 2);
    }

    #[test]
    fn test_construction_mismatch() {
        let err = Utterance::new(
            vec!["a", "b"],
            vec![vec![0.0]],
            vec![PosTag::X, PosTag::X],
            "en",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            UtteranceError::DimensionMismatch {
                tokens: 2,
                vectors: 1,
                pos_tags: 2
            }
        ));

        assert!(
            Utterance::new(vec!["a"], vec![vec![0.0]], vec![], "en").is_err()
        );

        let err = Utterance::new(
            vec!["a", "b"],
            vec![vec![0.0, 1.0], vec![0.0]],
            vec![PosTag::X, PosTag::X],
            "en",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            UtteranceError::VectorDimsMismatch {
                index: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_offsets_count_chars() {
        let utt = make_test_utterance("café au lait");
        let offsets: Vec<usize> = utt.tokens().map(|t| t.offset()).collect();
        assert_eq!(offsets, vec![0, 4, 5, 7, 8]);
        assert_eq!(utt.text_len(), 12);
    }

    #[test]
    fn test_empty_utterance() {
        let utt = Utterance::new(Vec::<String>::new(), vec![], vec![], "en").unwrap();
        assert!(utt.is_empty());
        assert_eq!(utt.to_string(), "");
        assert!(utt.sentence_embedding().is_empty());
        assert_eq!(utt.text_len(), 0);
    }

    #[test]
    fn test_to_string_default() {
        let utt = make_test_utterance("hello world");
        assert_eq!(utt.to_string(), "hello world");
    }

    #[test]
    fn test_to_string_space_placeholders() {
        let utt = vectored(
            &["\u{2581}Hello", "\u{2581}World"],
            &[[0.0, 0.0], [0.0, 0.0]],
        );
        assert_eq!(utt.to_string(), " Hello World");
        assert_eq!(
            utt.to_string_with(&UtteranceToStringOptions::default().with_lower_case(true)),
            " hello world"
        );
    }

    #[test]
    fn test_to_string_slots() {
        let mut utt = make_test_utterance("fly to new york, please");
        assert!(utt.tag_slot(slot("city"), 7, 15).unwrap());

        assert_eq!(utt.to_string(), "fly to new york, please");
        assert_eq!(
            utt.to_string_with(
                &UtteranceToStringOptions::default().with_slots(SlotStringMode::KeepName)
            ),
            "fly to citycitycity, please"
        );
        assert_eq!(
            utt.to_string_with(
                &UtteranceToStringOptions::default().with_slots(SlotStringMode::Ignore)
            ),
            "fly to , please"
        );
        assert_eq!(
            utt.to_string_with(
                &UtteranceToStringOptions::default()
                    .with_only_words(true)
                    .with_lower_case(true)
            ),
            "flytonew yorkplease"
        );
    }

    #[test]
    fn test_to_string_entities() {
        let mut utt = make_test_utterance("Buy 2 apples");
        utt.tag_entity(entity("number", serde_json::json!(2)), 4, 5)
            .unwrap();

        let with = |entities| {
            utt.to_string_with(&UtteranceToStringOptions::default().with_entities(entities))
        };
        assert_eq!(with(EntityStringMode::Ignore), "Buy  apples");
        assert_eq!(with(EntityStringMode::KeepDefault), "Buy 2 apples");
        assert_eq!(with(EntityStringMode::KeepName), "Buy number apples");
        assert_eq!(with(EntityStringMode::KeepValue), "Buy 2 apples");
        assert_eq!(utt.to_string(), "Buy  apples");
    }

    #[test]
    fn test_to_string_only_words_keeps_entities() {
        let mut utt = make_test_utterance("to new york, please");
        utt.tag_entity(entity("city", serde_json::json!("NYC")), 3, 11)
            .unwrap();

        let options = UtteranceToStringOptions::default()
            .with_only_words(true)
            .with_entities(EntityStringMode::KeepDefault);
        assert_eq!(utt.to_string_with(&options), "tonew yorkplease");
        assert_eq!(
            utt.to_string_with(&options.with_entities(EntityStringMode::KeepName)),
            "tocitycitycityplease"
        );
    }

    #[test]
    fn test_stored_zero_tfidf_is_kept() {
        let mut utt = vectored(&["good", " ", "day"], &[[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]]);
        let mut tfidf = TfidfTable::default();
        tfidf.insert("good".to_string(), 0.0);
        tfidf.insert("day".to_string(), 0.0);
        utt.set_global_tfidf(tfidf);

        assert_eq!(utt.token(0).unwrap().tfidf(), 0.0);
        assert_eq!(utt.sentence_embedding(), &[0.0, 0.0]);
    }

    #[test]
    fn test_to_string_slot_precedence() {
        let mut utt = make_test_utterance("at noon");
        utt.tag_slot(slot("when"), 3, 7).unwrap();
        utt.tag_entity(entity("time", serde_json::json!("12:00")), 3, 7)
            .unwrap();

        let options = UtteranceToStringOptions::default().with_entities(EntityStringMode::KeepName);
        assert_eq!(
            utt.to_string_with(&options.with_slots(SlotStringMode::KeepName)),
            "at when"
        );
        assert_eq!(
            utt.to_string_with(&options.with_slots(SlotStringMode::KeepValue)),
            "at noon"
        );
        // Ignored slots fall through to entity handling.
        assert_eq!(
            utt.to_string_with(&options.with_slots(SlotStringMode::Ignore)),
            "at time"
        );
        assert_eq!(
            utt.to_string_with(
                &UtteranceToStringOptions::default()
                    .with_slots(SlotStringMode::Ignore)
                    .with_entities(EntityStringMode::KeepValue)
            ),
            "at 12:00"
        );
    }

    #[test]
    fn test_tag_slot_unaligned_is_noop() {
        let mut utt = make_test_utterance("hello world");
        assert!(!utt.tag_slot(slot("x"), 1, 4).unwrap());
        assert!(!utt.tag_slot(slot("x"), 3, 3).unwrap());
        assert!(utt.slots().is_empty());
    }

    #[test]
    fn test_tag_invalid_range() {
        let mut utt = make_test_utterance("hello world");
        assert!(matches!(
            utt.tag_slot(slot("x"), 5, 2),
            Err(UtteranceError::InvalidRange { .. })
        ));
        assert!(matches!(
            utt.tag_entity(entity("x", serde_json::Value::Null), 0, 12),
            Err(UtteranceError::InvalidRange { max_end: 11, .. })
        ));
        assert!(utt.tag_slot(slot("x"), 0, 11).unwrap());
    }

    #[test]
    fn test_token_derived_tags() {
        let mut utt = make_test_utterance("from paris to rome");
        utt.tag_slot(slot("from"), 5, 10).unwrap();
        utt.tag_slot(slot("to"), 14, 18).unwrap();
        utt.tag_entity(entity("city", serde_json::json!("Paris")), 5, 10)
            .unwrap();

        let paris = utt.token(2).unwrap();
        assert_eq!(paris.value(), "paris");
        assert_eq!(paris.slots().len(), 1);
        assert_eq!(paris.slots()[0].payload.name, "from");
        assert_eq!(paris.entities().len(), 1);

        let rome = utt.token(6).unwrap();
        assert_eq!(rome.slots()[0].payload.name, "to");
        assert!(rome.entities().is_empty());

        assert!(utt.token(0).unwrap().slots().is_empty());
        assert!(utt.token(99).is_none());

        let range = utt.slots()[1].range;
        assert_eq!(
            (range.start_token_idx, range.end_token_idx),
            (6, 6)
        );
        assert_eq!((range.start_pos, range.end_pos), (14, 18));
    }

    #[test]
    fn test_tfidf_and_cluster() {
        let mut utt = vectored(&["hi", " ", "bob"], &[[0.0, 0.0], [0.0, 0.0], [9.0, 9.0]]);

        assert_eq!(utt.token(0).unwrap().tfidf(), DEFAULT_TFIDF);
        assert_eq!(utt.token(2).unwrap().cluster(), DEFAULT_CLUSTER);

        let mut tfidf = TfidfTable::default();
        tfidf.insert("hi".to_string(), 0.25);
        utt.set_global_tfidf(tfidf);
        utt.set_kmeans(Some(Arc::new(CentroidModel::new(vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![10.0, 10.0],
        ]))));

        assert_eq!(utt.token(0).unwrap().tfidf(), 0.25);
        assert_eq!(utt.token(2).unwrap().tfidf(), DEFAULT_TFIDF);
        assert_eq!(utt.token(0).unwrap().cluster(), 0);
        assert_eq!(utt.token(2).unwrap().cluster(), 2);

        utt.set_kmeans(None);
        assert_eq!(utt.token(2).unwrap().cluster(), DEFAULT_CLUSTER);
    }

    #[test]
    fn test_sentence_embedding() {
        let utt = vectored(
            &["good", " ", "day", "!"],
            &[[3.0, 4.0], [1.0, 1.0], [0.0, 2.0], [5.0, 5.0]],
        );

        // (0.6, 0.8) + (0.0, 1.0), averaged over two words.
        let embedding = utt.sentence_embedding();
        assert_eq!(embedding.len(), 2);
        assert!((embedding[0] - 0.3).abs() < 1e-6);
        assert!((embedding[1] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_sentence_embedding_tfidf_weights() {
        let mut utt = vectored(&["good", " ", "day"], &[[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]]);
        let mut tfidf = TfidfTable::default();
        tfidf.insert("good".to_string(), 0.5);
        tfidf.insert("day".to_string(), 7.0);
        utt.set_global_tfidf(tfidf);

        // Weights 0.5 and min(1, 7) = 1.
        let embedding = utt.sentence_embedding();
        assert!((embedding[0] - 0.5 / 1.5).abs() < 1e-6);
        assert!((embedding[1] - 1.0 / 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_sentence_embedding_is_memoized() {
        let mut utt = vectored(&["good", " ", "day"], &[[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]]);
        let first = utt.sentence_embedding().as_ptr();
        let second = utt.sentence_embedding().as_ptr();
        assert!(core::ptr::eq(first, second));

        let before = utt.sentence_embedding().to_vec();
        let mut tfidf = TfidfTable::default();
        tfidf.insert("good".to_string(), 0.1);
        utt.set_global_tfidf(tfidf);
        assert_eq!(utt.sentence_embedding(), before.as_slice());
    }

    #[test]
    fn test_sentence_embedding_nothing_contributes() {
        let utt = vectored(&["hello", "!"], &[[0.0, 0.0], [1.0, 1.0]]);
        let embedding = utt.sentence_embedding();
        assert_eq!(embedding, &[0.0, 0.0]);
        assert!(embedding.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_clone_with() {
        let mut utt = make_test_utterance("book a table at noon");
        utt.tag_slot(slot("thing"), 7, 12).unwrap();
        utt.tag_entity(entity("time", serde_json::json!("12:00")), 16, 20)
            .unwrap();
        utt.tag_entity(entity("article", serde_json::json!("a")), 5, 6)
            .unwrap();
        let mut tfidf = TfidfTable::default();
        tfidf.insert("book".to_string(), 0.5);
        utt.set_global_tfidf(tfidf);
        utt.set_kmeans(Some(Arc::new(CentroidModel::new(vec![vec![0.0]]))));

        let copy = utt.clone_with(true, true).unwrap();
        assert_eq!(copy.to_string(), utt.to_string());
        assert_eq!(copy.slots(), utt.slots());
        assert_eq!(copy.entities(), utt.entities());
        assert_eq!(copy.raw_tokens(), utt.raw_tokens());
        assert_eq!(copy.token(0).unwrap().tfidf(), 0.5);
        assert!(copy.kmeans().is_none());

        let bare = utt.clone_with(false, false).unwrap();
        assert!(bare.slots().is_empty());
        assert!(bare.entities().is_empty());
        // Without entities nothing is ignored on render.
        assert_eq!(bare.to_string(), "book a table at noon");
        assert_eq!(utt.to_string(), "book  table at ");
        let keep = UtteranceToStringOptions::default().with_entities(EntityStringMode::KeepDefault);
        assert_eq!(bare.to_string_with(&keep), utt.to_string_with(&keep));

        let slots_only = utt.clone_with(false, true).unwrap();
        assert_eq!(slots_only.slots().len(), 1);
        assert!(slots_only.entities().is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut utt = make_test_utterance("hi bob");
        utt.tag_slot(slot("name"), 3, 6).unwrap();

        let json = serde_json::to_value(utt.snapshot()).unwrap();
        assert_eq!(json["language"], "en");
        assert_eq!(json["text"], "hi bob");
        assert_eq!(json["tokens"].as_array().unwrap().len(), 3);
        assert_eq!(json["tokens"][2]["value"], "bob");
        assert_eq!(json["tokens"][2]["offset"], 3);
        assert_eq!(json["tokens"][2]["tfidf"], 1.0);
        assert_eq!(json["tokens"][2]["pos"], "N/A");
        assert_eq!(json["slots"][0]["name"], "name");
        assert_eq!(json["slots"][0]["start_token_idx"], 2);
    }
}
