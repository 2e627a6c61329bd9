use std::iter::FusedIterator;

use crate::error::{ScoreError, ScoreResult};

/// Splits a corpus into tokens on single spaces.
///
/// Consecutive spaces are not collapsed: `"a  b"` yields `["a", "", "b"]`.
/// Trailing empty tokens are dropped, so `"a b "` yields `["a", "b"]` and an
/// empty corpus has no tokens.
pub fn tokenize(corpus: &str) -> Vec<&str> {
	let mut tokens: Vec<&str> = corpus.split(' ').collect();
	while tokens.last().is_some_and(|token| token.is_empty()) {
		tokens.pop();
	}
	tokens
}

/// Number of tokens `tokenize` would produce for `corpus`.
pub fn token_count(corpus: &str) -> usize {
	tokenize(corpus).len()
}

/// Sliding-window word n-gram producer.
///
/// Yields every run of `n` consecutive tokens of a corpus, left to right,
/// joined by single spaces. A corpus of `T` tokens yields exactly
/// `max(0, T - n + 1)` grams.
///
/// The producer is single-pass: once exhausted it keeps returning `None`.
/// Build a new one over the same corpus to walk it again.
///
/// ## Invariants
/// - `n` is always >= 1
/// - `pos + n <= tokens.len()` whenever a gram remains
#[derive(Clone, Debug)]
pub struct Grams<'a> {
	/// Tokens of the corpus, borrowed from the input string.
	tokens: Vec<&'a str>,
	/// Window size.
	n: usize,
	/// Index of the first token of the next gram.
	pos: usize,
}

impl<'a> Grams<'a> {
	/// Creates a producer of `n`-grams over `corpus`.
	///
	/// # Errors
	/// Returns `ScoreError::InvalidGramSize` if `n < 1`.
	pub fn new(n: usize, corpus: &'a str) -> ScoreResult<Self> {
		if n < 1 {
			return Err(ScoreError::InvalidGramSize(n));
		}
		Ok(Self { tokens: tokenize(corpus), n, pos: 0 })
	}

	/// Window size of this producer.
	pub fn size(&self) -> usize {
		self.n
	}

	/// Returns true while at least one gram is left.
	pub fn has_next(&self) -> bool {
		self.pos + self.n <= self.tokens.len()
	}

	/// Number of grams still to be produced.
	pub fn remaining(&self) -> usize {
		(self.tokens.len() + 1).saturating_sub(self.pos + self.n)
	}
}

impl Iterator for Grams<'_> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if !self.has_next() {
			return None;
		}
		let gram = self.tokens[self.pos..self.pos + self.n].join(" ");
		self.pos += 1;
		Some(gram)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.remaining();
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for Grams<'_> {}

impl FusedIterator for Grams<'_> {}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn bigrams_in_order() {
		let grams: Vec<String> = Grams::new(2, "the quick brown fox").unwrap().collect();
		assert_eq!(grams, vec!["the quick", "quick brown", "brown fox"]);
	}

	#[rstest]
	#[case("a b c d", 1, 4)]
	#[case("a b c d", 4, 1)]
	#[case("a b c d", 5, 0)]
	#[case("", 1, 0)]
	#[case("solo", 1, 1)]
	fn gram_counts(#[case] corpus: &str, #[case] n: usize, #[case] expected: usize) {
		let grams = Grams::new(n, corpus).unwrap();
		assert_eq!(grams.len(), expected);
		assert_eq!(grams.count(), expected);
	}

	#[test]
	fn zero_window_is_rejected() {
		assert_eq!(Grams::new(0, "a b").unwrap_err(), ScoreError::InvalidGramSize(0));
	}

	#[test]
	fn double_space_produces_empty_token() {
		assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
		let grams: Vec<String> = Grams::new(2, "a  b").unwrap().collect();
		assert_eq!(grams, vec!["a ", " b"]);
	}

	#[test]
	fn exhausted_producer_stays_empty() {
		let mut grams = Grams::new(1, "x").unwrap();
		assert!(grams.has_next());
		assert_eq!(grams.next().as_deref(), Some("x"));
		assert!(!grams.has_next());
		assert_eq!(grams.next(), None);
		assert_eq!(grams.next(), None);
	}

	#[rstest]
	#[case("", 0)]
	#[case("a", 1)]
	#[case("a b", 2)]
	#[case("a b ", 2)]
	#[case("a  b  ", 3)]
	#[case("   ", 0)]
	#[case(" lead", 2)]
	fn token_count_matches_tokenize(#[case] corpus: &str, #[case] expected: usize) {
		assert_eq!(token_count(corpus), expected);
		assert_eq!(tokenize(corpus).len(), expected);
	}

	#[test]
	fn trailing_spaces_add_no_tokens() {
		assert_eq!(tokenize("a b "), vec!["a", "b"]);
		assert_eq!(tokenize("a  b  "), vec!["a", "", "b"]);
		let grams: Vec<String> = Grams::new(1, "a b ").unwrap().collect();
		assert_eq!(grams, vec!["a", "b"]);
	}
}
