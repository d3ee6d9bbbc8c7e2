//! # Text Utilities
//!
//! Character classes, string normalization and vector math shared by
//! the token and utterance code.

pub mod chars;
pub mod math;
pub mod strings;

#[doc(inline)]
pub use chars::*;
#[doc(inline)]
pub use strings::*;
