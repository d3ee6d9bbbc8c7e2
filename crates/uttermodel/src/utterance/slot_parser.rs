//! # Slot Syntax Parser
//!
//! Training utterances are authored with inline slot annotations:
//! ``book a flight to [new york](destination)``. The parser strips the
//! markup and records where each slot value lands in the clean text.

use core::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static SLOT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(.+?)\]\(([\w_. :-]+)\)").expect("slot pattern is valid")
});

/// A slot annotation found in an authored utterance.
///
/// Positions are character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSlot {
    /// The slot name.
    pub name: String,

    /// The annotated text.
    pub value: String,

    /// Position of the whole annotation in the authored text.
    pub raw_position: Range<usize>,

    /// Position of the value in the clean text.
    pub clean_position: Range<usize>,
}

/// A run of clean text; either plain or a slot value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtterancePart {
    /// The text.
    pub text: String,

    /// The slot name, for slot values.
    pub slot: Option<String>,
}

/// An authored utterance with its slot markup removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUtterance {
    /// The authored text.
    pub raw: String,

    /// The clean text.
    pub utterance: String,

    /// The slot annotations, in text order.
    pub parsed_slots: Vec<ParsedSlot>,

    /// The clean text, split into plain and slot parts.
    pub parts: Vec<UtterancePart>,
}

fn push_plain(
    parsed: &mut ParsedUtterance,
    text: &str,
    clean_chars: &mut usize,
) {
    if text.is_empty() {
        return;
    }
    parsed.utterance.push_str(text);
    parsed.parts.push(UtterancePart {
        text: text.to_string(),
        slot: None,
    });
    *clean_chars += text.chars().count();
}

/// Parse inline ``[value](slot)`` annotations out of an utterance.
///
/// Text which does not match the annotation syntax is kept verbatim.
pub fn parse_utterance(raw: &str) -> ParsedUtterance {
    let mut parsed = ParsedUtterance {
        raw: raw.to_string(),
        ..Default::default()
    };

    // Running character counts of the raw and clean text.
    let mut raw_chars = 0;
    let mut clean_chars = 0;
    let mut cursor = 0;

    for caps in SLOT_PATTERN.captures_iter(raw) {
        let (Some(whole), Some(value), Some(name)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        let before = &raw[cursor..whole.start()];
        push_plain(&mut parsed, before, &mut clean_chars);
        raw_chars += before.chars().count();

        let value = value.as_str();
        let value_chars = value.chars().count();
        let whole_chars = whole.as_str().chars().count();

        parsed.utterance.push_str(value);
        parsed.parts.push(UtterancePart {
            text: value.to_string(),
            slot: Some(name.as_str().to_string()),
        });
        parsed.parsed_slots.push(ParsedSlot {
            name: name.as_str().to_string(),
            value: value.to_string(),
            raw_position: raw_chars..raw_chars + whole_chars,
            clean_position: clean_chars..clean_chars + value_chars,
        });

        raw_chars += whole_chars;
        clean_chars += value_chars;
        cursor = whole.end();
    }
    push_plain(&mut parsed, &raw[cursor..], &mut clean_chars);

    parsed
}
