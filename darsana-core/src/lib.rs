//! Comparative n-gram scoring of two text corpora.
//!
//! This crate provides:
//! - A sliding-window word n-gram producer
//! - Concept maps counting grams shared by two corpora
//! - Four scoring algorithms (raw frequency, relative frequency,
//!   string distance, tf-idf)
//! - A lemma dictionary and request-side text normalization helpers
//!
//! ```
//! use darsana_core::{score, ScoreMethod};
//!
//! let scores = score("the quick fox", "the quick dog", ScoreMethod::RawFrequency, 2).unwrap();
//! assert_eq!(scores.get("the quick"), Some(&2.0));
//! ```

/// Error types for scoring and dictionary loading.
pub mod error;

/// Word n-gram producer and tokenizer.
pub mod gram;

/// Concept maps, method selector and scoring engine.
pub mod model;

/// Lemma dictionary (lemma → surface forms).
pub mod dictionary;

/// Punctuation stripping and lowercasing for request text.
pub mod normalize;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{DictionaryError, ScoreError, ScoreResult};
pub use model::method::ScoreMethod;
pub use model::scorer::{score, score_with_code, ScoreMap};
