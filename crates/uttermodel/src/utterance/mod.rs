//! # Utterances
//!
//! [`Utterance`] is the immutable token sequence every NLU stage consumes,
//! plus the slots and entities tagged onto it.
//!
//! See:
//! * [`build_utterance_batch`] to build utterances with [`LanguageTools`](crate::language::LanguageTools).
//! * [`get_alternate_utterance`] for out-of-vocabulary augmentation.

mod alternate;
mod batch;
mod ranges;
mod slot_parser;
mod string_options;
mod token;
mod utterance_impl;

#[doc(inline)]
pub use alternate::*;
#[doc(inline)]
pub use batch::*;
#[doc(inline)]
pub use ranges::*;
#[doc(inline)]
pub use slot_parser::*;
#[doc(inline)]
pub use string_options::*;
#[doc(inline)]
pub use token::*;
#[doc(inline)]
pub use utterance_impl::*;
