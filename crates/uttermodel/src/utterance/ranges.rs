//! # Utterance Ranges
//!
//! Slots and entities are both payloads tagged over a token-aligned range;
//! validation and token alignment are shared here.

use crate::errors::{UMResult, UtteranceError};
use crate::utterance::Token;

/// A token-aligned span of an utterance.
///
/// Token indices are inclusive; character positions are the requested
/// ``[start_pos, end_pos)`` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UtteranceRange {
    /// Index of the first covered token.
    pub start_token_idx: usize,

    /// Index of the last covered token.
    pub end_token_idx: usize,

    /// Character start position.
    pub start_pos: usize,

    /// Character end position (exclusive).
    pub end_pos: usize,
}

impl UtteranceRange {
    /// Does the range cover the token at `index`?
    pub fn covers_token(
        &self,
        index: usize,
    ) -> bool {
        self.start_token_idx <= index && index <= self.end_token_idx
    }
}

/// A slot extracted by an external parser or annotator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExtractedSlot {
    /// The slot name.
    pub name: String,

    /// The source text of the slot.
    pub source: String,

    /// The extracted value.
    pub value: serde_json::Value,

    /// Extraction confidence, in ``[0, 1]``.
    pub confidence: f32,
}

impl ExtractedSlot {
    /// A slot whose value is its source text.
    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
        confidence: f32,
    ) -> Self {
        let source = source.into();
        Self {
            name: name.into(),
            value: serde_json::Value::String(source.clone()),
            source,
            confidence,
        }
    }
}

/// An entity extracted by an external recognizer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExtractedEntity {
    /// The entity type, e.g. ``time`` or ``city``.
    #[serde(rename = "type")]
    pub entity_type: String,

    /// The resolved value.
    pub value: serde_json::Value,

    /// Extraction confidence, in ``[0, 1]``.
    pub confidence: f32,

    /// Extractor-specific metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl ExtractedEntity {
    /// The entity's value rendered as text.
    ///
    /// Strings render bare; other values render as JSON.
    pub fn value_string(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A payload tagged over an [`UtteranceRange`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tagged<P> {
    /// The covered range.
    #[serde(flatten)]
    pub range: UtteranceRange,

    /// The tagged payload.
    #[serde(flatten)]
    pub payload: P,
}

/// A slot tagged on an utterance.
pub type UtteranceSlot = Tagged<ExtractedSlot>;

/// An entity tagged on an utterance.
pub type UtteranceEntity = Tagged<ExtractedEntity>;

/// Check a ``[start, end)`` character range against an utterance length.
pub fn validate_range(
    start: usize,
    end: usize,
    max_end: usize,
) -> UMResult<()> {
    if start > end || start > max_end || end > max_end {
        return Err(UtteranceError::InvalidRange {
            start,
            end,
            max_end,
        });
    }
    Ok(())
}

/// Align a validated ``[start, end)`` character range to whole tokens.
///
/// Only tokens lying entirely inside the range qualify.
///
/// ## Returns
/// The range over the first and last qualifying tokens, or `None` when no
/// token qualifies.
pub fn align_range(
    tokens: &[Token],
    start: usize,
    end: usize,
) -> Option<UtteranceRange> {
    let mut covered = tokens
        .iter()
        .filter(|t| t.offset >= start && t.offset + t.len <= end);

    let first = covered.next()?;
    let last = covered.last().unwrap_or(first);

    Some(UtteranceRange {
        start_token_idx: first.index,
        end_token_idx: last.index,
        start_pos: start,
        end_pos: end,
    })
}

/// Validate and align a range, then attach `payload` to it.
///
/// ## Returns
/// `Ok(None)` when the range aligns to no token.
pub fn tag_range<P>(
    tokens: &[Token],
    max_end: usize,
    payload: P,
    start: usize,
    end: usize,
) -> UMResult<Option<Tagged<P>>> {
    validate_range(start, end, max_end)?;
    Ok(align_range(tokens, start, end).map(|range| Tagged { range, payload }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_test_utterance;

    #[test]
    fn test_validate_range() {
        assert!(validate_range(0, 0, 0).is_ok());
        assert!(validate_range(0, 5, 5).is_ok());
        assert!(validate_range(2, 3, 5).is_ok());

        assert!(matches!(
            validate_range(3, 2, 5),
            Err(UtteranceError::InvalidRange { .. })
        ));
        assert!(validate_range(0, 6, 5).is_err());
        assert!(validate_range(6, 6, 5).is_err());
    }

    #[test]
    fn test_align_range() {
        // "hello", " ", "big", " ", "world"
        let utt = make_test_utterance("hello big world");
        let tokens = utt.raw_tokens();

        let range = align_range(tokens, 6, 15).unwrap();
        assert_eq!(range.start_token_idx, 2);
        assert_eq!(range.end_token_idx, 4);
        assert_eq!((range.start_pos, range.end_pos), (6, 15));

        // Containment, not overlap.
        assert_eq!(align_range(tokens, 7, 15).unwrap().start_token_idx, 3);
        assert!(align_range(tokens, 1, 4).is_none());
        assert!(align_range(tokens, 0, 0).is_none());
    }

    #[test]
    fn test_covers_token() {
        let range = UtteranceRange {
            start_token_idx: 1,
            end_token_idx: 3,
            start_pos: 0,
            end_pos: 0,
        };
        assert!(!range.covers_token(0));
        assert!(range.covers_token(1));
        assert!(range.covers_token(3));
        assert!(!range.covers_token(4));
    }

    #[test]
    fn test_entity_value_string() {
        let mut entity = ExtractedEntity {
            entity_type: "number".to_string(),
            value: serde_json::json!(42),
            confidence: 1.0,
            metadata: serde_json::Value::Null,
        };
        assert_eq!(entity.value_string(), "42");

        entity.value = serde_json::json!("forty two");
        assert_eq!(entity.value_string(), "forty two");
    }

    #[test]
    fn test_tagged_serde_is_flat() {
        let slot = Tagged {
            range: UtteranceRange {
                start_token_idx: 0,
                end_token_idx: 2,
                start_pos: 0,
                end_pos: 9,
            },
            payload: ExtractedSlot::from_source("city", "new york", 1.0),
        };

        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["name"], "city");
        assert_eq!(json["value"], "new york");
        assert_eq!(json["end_pos"], 9);

        let back: UtteranceSlot = serde_json::from_value(json).unwrap();
        assert_eq!(back, slot);
    }
}
