//! # Vocabulary Collaborators
//!
//! Nearest-neighbour lookup into a bot-wide vocabulary, and
//! nearest-cluster lookup into a trained clustering model.

pub mod cluster_model;
pub mod nearest_token;

#[doc(inline)]
pub use cluster_model::*;
#[doc(inline)]
pub use nearest_token::*;
