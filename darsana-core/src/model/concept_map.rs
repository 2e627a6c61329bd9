use std::collections::BTreeMap;
use std::collections::btree_map;

use tracing::debug;

use crate::error::ScoreResult;
use crate::gram::Grams;

/// Occurrence counts of grams, ordered lexicographically by gram.
///
/// A `ConceptMap` is built from one corpus (`from_corpus`) or from the
/// grams shared by two corpora (`shared`).
///
/// # Responsibilities
/// - Count gram occurrences (exact, case-sensitive match)
/// - Merge with another map by summing counts
/// - Restrict itself to the grams of another map
///
/// # Invariants
/// - Every stored count is >= 1.0
/// - Iteration order is the byte order of the grams
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConceptMap {
	counts: BTreeMap<String, f64>,
}

impl ConceptMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts the `n`-grams of a single corpus.
	///
	/// # Errors
	/// Returns an error if `n < 1`.
	pub fn from_corpus(corpus: &str, n: usize) -> ScoreResult<Self> {
		Ok(Grams::new(n, corpus)?.collect())
	}

	/// Counts the `n`-grams of both corpora and keeps only those present in each.
	///
	/// The count of a kept gram is its number of occurrences in `source`
	/// plus its number of occurrences in `destination`.
	///
	/// # Errors
	/// Returns an error if `n < 1`.
	pub fn shared(source: &str, destination: &str, n: usize) -> ScoreResult<Self> {
		let source_map = Self::from_corpus(source, n)?;
		let destination_map = Self::from_corpus(destination, n)?;

		let mut combined = source_map.clone();
		combined.merge(&destination_map);
		let total = combined.len();

		combined.intersect(&source_map);
		combined.intersect(&destination_map);

		debug!(
			n,
			source_grams = source_map.len(),
			destination_grams = destination_map.len(),
			union = total,
			shared = combined.len(),
			"Built shared concept map"
		);
		Ok(combined)
	}

	/// Records one occurrence of `gram`.
	pub fn add(&mut self, gram: String) {
		*self.counts.entry(gram).or_insert(0.0) += 1.0;
	}

	/// Merges another map into this one, summing counts of matching grams.
	pub fn merge(&mut self, other: &Self) {
		for (gram, count) in &other.counts {
			if let Some(existing) = self.counts.get_mut(gram) {
				*existing += count;
			} else {
				self.counts.insert(gram.clone(), *count);
			}
		}
	}

	/// Drops every gram that does not appear in `other`.
	pub fn intersect(&mut self, other: &Self) {
		self.counts.retain(|gram, _| other.contains(gram));
	}

	/// Keeps only the entries for which `keep` returns true.
	pub fn retain<F>(&mut self, mut keep: F)
	where
		F: FnMut(&str, f64) -> bool,
	{
		self.counts.retain(|gram, count| keep(gram, *count));
	}

	/// Count of `gram`, if present.
	pub fn get(&self, gram: &str) -> Option<f64> {
		self.counts.get(gram).copied()
	}

	pub fn contains(&self, gram: &str) -> bool {
		self.counts.contains_key(gram)
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates `(gram, count)` pairs in gram order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.counts.iter().map(|(gram, count)| (gram.as_str(), *count))
	}

	/// Iterates grams in order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.counts.keys().map(String::as_str)
	}

	pub fn into_inner(self) -> BTreeMap<String, f64> {
		self.counts
	}
}

impl FromIterator<String> for ConceptMap {
	fn from_iter<I: IntoIterator<Item = String>>(grams: I) -> Self {
		let mut map = Self::new();
		for gram in grams {
			map.add(gram);
		}
		map
	}
}

/// Wraps precomputed counts as they are.
impl From<BTreeMap<String, f64>> for ConceptMap {
	fn from(counts: BTreeMap<String, f64>) -> Self {
		Self { counts }
	}
}

impl IntoIterator for ConceptMap {
	type Item = (String, f64);
	type IntoIter = btree_map::IntoIter<String, f64>;

	fn into_iter(self) -> Self::IntoIter {
		self.counts.into_iter()
	}
}
