//! # Language Tools
//!
//! The tokenizer / part-of-speech tagger / vectorizer collaborators an
//! utterance batch is built with.
//!
//! The [`LanguageTools`] trait is the seam; [`WhitespaceTools`] is a small
//! self-contained implementation suitable for tests and tooling.

pub mod language_tools;
pub mod pos_tag;
pub mod whitespace_tools;

#[doc(inline)]
pub use language_tools::*;
#[doc(inline)]
pub use pos_tag::*;
#[doc(inline)]
pub use whitespace_tools::*;
