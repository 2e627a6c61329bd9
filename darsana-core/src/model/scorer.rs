use std::collections::BTreeMap;

use tracing::debug;

use super::concept_map::ConceptMap;
use super::method::ScoreMethod;
use crate::error::{ScoreError, ScoreResult};
use crate::gram::token_count;

/// Result of a scoring call: gram (or `"gramA,gramB"` pair) to score,
/// in gram order.
pub type ScoreMap = BTreeMap<String, f64>;

/// Grams seen this many times across both corpora are dropped by `RawFrequency`.
const NOISE_COUNT: f64 = 1.0;

/// `RelativeFrequency` keeps grams whose harmonic frequency is above this.
const HARMONIC_THRESHOLD: f64 = 1.0;

/// `StringDistance` keeps pairs whose Jaro-Winkler similarity reaches this.
pub const SIMILARITY_THRESHOLD: f64 = 0.9;

/// Scores the grams shared by `source` and `destination`.
///
/// # Parameters
/// - `source`, `destination`: corpora, already normalized by the caller
///   (no case folding or punctuation handling happens here).
/// - `method`: scoring algorithm.
/// - `gram_size`: window size, >= 1.
///
/// # Returns
/// An ordered map whose keys are all grams present in both corpora at
/// `gram_size` (pairs of such grams for `StringDistance`).
///
/// # Errors
/// - `InvalidGramSize` if `gram_size < 1`
/// - `NumericDomain` if a logarithm or a division would get a non-positive input
/// - `MissingUnigram` on an internal inconsistency between gram and unigram maps
pub fn score(source: &str, destination: &str, method: ScoreMethod, gram_size: usize) -> ScoreResult<ScoreMap> {
	if gram_size < 1 {
		return Err(ScoreError::InvalidGramSize(gram_size));
	}

	let concepts = ConceptMap::shared(source, destination, gram_size)?;
	debug!(%method, gram_size, shared = concepts.len(), "Scoring shared grams");

	let scores = match method {
		ScoreMethod::RawFrequency => raw_frequency(concepts),
		ScoreMethod::RelativeFrequency => {
			let unigrams = ConceptMap::shared(source, destination, 1)?;
			relative_frequency(&concepts, &unigrams)?
		}
		ScoreMethod::StringDistance => string_distance(&concepts),
		ScoreMethod::TfIdf => {
			let unigrams = ConceptMap::shared(source, destination, 1)?;
			let document_size = token_count(source) + token_count(destination);
			tf_idf(&concepts, &unigrams, document_size)?
		}
	};

	debug!(%method, scored = scores.len(), "Scoring done");
	Ok(scores)
}

/// Same as [`score`], with the method given by its wire code.
///
/// # Errors
/// Returns `UnknownMethod` for a code outside 0..=3, before any work is done.
pub fn score_with_code(source: &str, destination: &str, method_code: i64, gram_size: usize) -> ScoreResult<ScoreMap> {
	let method = ScoreMethod::try_from(method_code)?;
	score(source, destination, method, gram_size)
}

/// Drops grams seen only once and returns the remaining counts as scores.
fn raw_frequency(mut concepts: ConceptMap) -> ScoreMap {
	concepts.retain(|_, count| count != NOISE_COUNT);
	concepts.into_inner()
}

/// Scores each gram by the harmonic mean of its words' unigram frequencies,
/// keeping only scores above `HARMONIC_THRESHOLD`.
fn relative_frequency(concepts: &ConceptMap, unigrams: &ConceptMap) -> ScoreResult<ScoreMap> {
	let mut scores = ScoreMap::new();
	for gram in concepts.keys() {
		let harmonic = harmonic_frequency(gram, unigrams)?;
		if harmonic > HARMONIC_THRESHOLD {
			scores.insert(gram.to_owned(), harmonic);
		}
	}
	Ok(scores)
}

/// Harmonic mean of the unigram frequencies of the words of `gram`:
/// `k / sum(1 / freq(word_i))`.
///
/// # Errors
/// - `MissingUnigram` if a word is absent from `unigrams`
/// - `NumericDomain` if a word has a zero frequency
pub fn harmonic_frequency(gram: &str, unigrams: &ConceptMap) -> ScoreResult<f64> {
	let mut inverse_sum = 0.0;
	let mut words = 0usize;

	for word in gram.split(' ') {
		let frequency = unigram_frequency(gram, word, unigrams)?;
		if !is_positive(frequency) {
			return Err(ScoreError::NumericDomain {
				gram: gram.to_owned(),
				quantity: "unigram frequency",
				value: frequency,
			});
		}
		inverse_sum += 1.0 / frequency;
		words += 1;
	}

	Ok(words as f64 / inverse_sum)
}

/// Compares each shared gram with its lexicographic successor only.
///
/// The last gram has no successor. Pairs are keyed `"first,second"`.
fn string_distance(concepts: &ConceptMap) -> ScoreMap {
	let grams: Vec<&str> = concepts.keys().collect();

	grams
		.windows(2)
		.filter_map(|pair| {
			let similarity = strsim::jaro_winkler(pair[0], pair[1]);
			(similarity >= SIMILARITY_THRESHOLD).then(|| (format!("{},{}", pair[0], pair[1]), similarity))
		})
		.collect()
}

/// Scores each shared gram with [`tf_idf_weight`].
///
/// - term frequency: sum of the unigram frequencies of the gram's words,
///   integer-divided by its word count
/// - document frequency: the gram's combined count
/// - document size: `document_size`, the token count of both corpora
fn tf_idf(concepts: &ConceptMap, unigrams: &ConceptMap, document_size: usize) -> ScoreResult<ScoreMap> {
	let mut scores = ScoreMap::new();
	for (gram, document_frequency) in concepts.iter() {
		let term_frequency = term_frequency(gram, unigrams)?;
		let weight = tf_idf_weight(gram, term_frequency, document_frequency, document_size)?;
		scores.insert(gram.to_owned(), weight);
	}
	Ok(scores)
}

/// Mean unigram frequency of the words of `gram`, truncated to an integer.
pub fn term_frequency(gram: &str, unigrams: &ConceptMap) -> ScoreResult<f64> {
	let mut sum = 0.0;
	let mut words = 0usize;
	for word in gram.split(' ') {
		sum += unigram_frequency(gram, word, unigrams)?;
		words += 1;
	}
	// Integer division
	Ok((sum / words as f64).floor())
}

/// `(1 + ln(tf)) * ln(document_size / document_frequency)`.
///
/// # Errors
/// Returns `NumericDomain` when `term_frequency`, `document_frequency` or
/// `document_size` is not strictly positive, instead of yielding NaN or infinity.
pub fn tf_idf_weight(
	gram: &str,
	term_frequency: f64,
	document_frequency: f64,
	document_size: usize,
) -> ScoreResult<f64> {
	let domain_error = |quantity: &'static str, value: f64| ScoreError::NumericDomain {
		gram: gram.to_owned(),
		quantity,
		value,
	};

	// NaN fails the check as well
	if !is_positive(term_frequency) {
		return Err(domain_error("term frequency", term_frequency));
	}
	if !is_positive(document_frequency) {
		return Err(domain_error("document frequency", document_frequency));
	}
	if document_size == 0 {
		return Err(domain_error("document size", 0.0));
	}

	Ok((1.0 + term_frequency.ln()) * (document_size as f64 / document_frequency).ln())
}

fn is_positive(value: f64) -> bool {
	value > 0.0
}

fn unigram_frequency(gram: &str, word: &str, unigrams: &ConceptMap) -> ScoreResult<f64> {
	unigrams.get(word).ok_or_else(|| ScoreError::MissingUnigram {
		gram: gram.to_owned(),
		word: word.to_owned(),
	})
}
