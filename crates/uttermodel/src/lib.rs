//! # `uttermodel` Utterance Modeling
//!
//! The utterance-modeling core of an NLU pipeline: turns raw text into
//! an [`utterance::Utterance`] (tokens, part-of-speech tags, vectors,
//! slots and entities) for downstream intent and slot classifiers.
//!
//! See:
//! * [`utterance`] for the utterance model, batch construction and
//!   out-of-vocabulary alternates.
//! * [`language`] for the tokenizer / tagger / vectorizer collaborators.
//! * [`vocab`] for vocabulary and clustering collaborators.
//! * [`text`] for token character classes and vector math.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel construction of utterance batches,
//! see [`utterance::BatchOptions`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! #### feature: ``testing``
//!
//! Exposes [`testing`] utilities for downstream tests.
//!
//! ## Building Utterances
//!
//! ```rust
//! use uttermodel::language::WhitespaceTools;
//! use uttermodel::utterance::{
//!     BatchOptions, SlotStringMode, UtteranceToStringOptions, build_utterance_batch,
//! };
//!
//! let tools = WhitespaceTools::default();
//! let batch = build_utterance_batch(
//!     &["book a flight to [paris](city)", ""],
//!     "en",
//!     &tools,
//!     None,
//!     &BatchOptions::default(),
//! )?;
//!
//! assert_eq!(batch.len(), 1);
//! assert_eq!(batch[0].to_string(), "book a flight to paris");
//! assert_eq!(
//!     batch[0].to_string_with(
//!         &UtteranceToStringOptions::default().with_slots(SlotStringMode::KeepName)
//!     ),
//!     "book a flight to city"
//! );
//! # Ok::<(), uttermodel::errors::UtteranceError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod language;
pub mod text;
pub mod types;
pub mod utterance;
pub mod vocab;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
