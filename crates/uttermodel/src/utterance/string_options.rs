//! # Utterance Rendering Options

/// How slot-tagged tokens render.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SlotStringMode {
    /// Keep the token text.
    #[default]
    KeepValue,

    /// Replace the token with the slot name.
    KeepName,

    /// Drop the token.
    Ignore,
}

/// How entity-tagged tokens render.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum EntityStringMode {
    /// Keep the token text.
    KeepDefault,

    /// Replace the token with the entity's value.
    KeepValue,

    /// Replace the token with the entity type.
    KeepName,

    /// Drop the token.
    #[default]
    Ignore,
}

/// Options for [`Utterance::to_string_with`](crate::utterance::Utterance::to_string_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UtteranceToStringOptions {
    /// Lowercase the result.
    pub lower_case: bool,

    /// Keep only word tokens and slot- or entity-tagged tokens.
    pub only_words: bool,

    /// Slot handling.
    pub slots: SlotStringMode,

    /// Entity handling.
    pub entities: EntityStringMode,
}

impl UtteranceToStringOptions {
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

    /// Sets the only-words flag.
    pub fn set_only_words(
        &mut self,
        only_words: bool,
    ) {
        self.only_words = only_words;
    }

    /// Sets the only-words flag.
    ///
    /// See: [`set_only_words`](Self::set_only_words)
    pub fn with_only_words(
        mut self,
        only_words: bool,
    ) -> Self {
        self.set_only_words(only_words);
        self
    }

    /// Sets the slot handling.
    pub fn set_slots(
        &mut self,
        slots: SlotStringMode,
    ) {
        self.slots = slots;
    }

    /// Sets the slot handling.
    ///
    /// See: [`set_slots`](Self::set_slots)
    pub fn with_slots(
        mut self,
        slots: SlotStringMode,
    ) -> Self {
        self.set_slots(slots);
        self
    }

    /// Sets the entity handling.
    pub fn set_entities(
        &mut self,
        entities: EntityStringMode,
    ) {
        self.entities = entities;
    }

    /// Sets the entity handling.
    ///
    /// See: [`set_entities`](Self::set_entities)
    pub fn with_entities(
        mut self,
        entities: EntityStringMode,
    ) -> Self {
        self.set_entities(entities);
        self
    }
}
