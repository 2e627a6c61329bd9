//! Frequency modeling and scoring of grams shared by two corpora.
//!
//! - Gram occurrence maps (`ConceptMap`)
//! - The closed set of scoring algorithms (`ScoreMethod`)
//! - The scoring entry points (`score`, `score_with_code`)

/// Gram to occurrence-count maps, for one corpus or shared by two.
///
/// Supports counting, merging and intersection.
pub mod concept_map;

/// Scoring algorithm selector and its wire codes.
pub mod method;

/// Scoring engine.
///
/// Builds the shared concept maps and applies one of the four
/// algorithms: raw frequency, relative (harmonic) frequency,
/// string distance and tf-idf.
pub mod scorer;
