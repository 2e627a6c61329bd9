use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::DictionaryError;
use crate::io::{build_output_path, is_fresh, read_file};

/// A lemma and the surface forms that map to it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
struct LemmaEntry {
	lemma: String,
	/// Surface forms, in insertion order, without duplicates.
	forms: Vec<String>,
}

/// Lemma dictionary for one language.
///
/// Each lemma is unique and maps to any number of surface forms
/// ("run" → "runs", "ran", "running"). Lemmas and forms keep their
/// insertion order, so lookups that scan the dictionary are deterministic.
///
/// The scoring engine does not use the dictionary; it is meant for
/// callers that want to lemmatize corpora before scoring them.
///
/// ## Invariants
/// - `index[lemma]` is the position of `lemma` in `entries`
/// - A `(lemma, form)` pair is stored at most once
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
	language: String,
	entries: Vec<LemmaEntry>,
	index: HashMap<String, usize>,
}

impl Dictionary {
	/// Creates an empty dictionary for `language`.
	pub fn new(language: &str) -> Self {
		Self {
			language: language.to_owned(),
			..Self::default()
		}
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	/// Loads a dictionary from a tab-separated text file.
	///
	/// Each line reads `lemma<TAB>form form ...`. Blank lines and lines
	/// starting with `#` are skipped.
	///
	/// # Behavior
	/// - A binary snapshot (`postcard`) is kept next to the text file
	///   (`lemmas.tsv` → `lemmas.bin`).
	/// - The snapshot is used when it is at least as recent as the text
	///   file and was built for the same language; otherwise the text file
	///   is parsed and the snapshot rewritten.
	///
	/// # Errors
	/// - `Io` if the file cannot be read or the snapshot cannot be written
	/// - `Format` on a malformed line
	/// - `Snapshot` if the snapshot cannot be encoded or decoded
	pub fn from_file<P: AsRef<Path>>(language: &str, filepath: P) -> Result<Self, DictionaryError> {
		let filepath = filepath.as_ref();
		let snapshot_path = build_output_path(filepath, "bin")?;

		if is_fresh(filepath, &snapshot_path) {
			let bytes = fs::read(&snapshot_path)?;
			let dictionary: Dictionary = postcard::from_bytes(&bytes)?;
			if dictionary.language == language {
				info!(path = %snapshot_path.display(), lemmas = dictionary.len(), "Loaded dictionary snapshot");
				return Ok(dictionary);
			}
			debug!(
				expected = language,
				found = %dictionary.language,
				"Snapshot language mismatch, rebuilding"
			);
		}

		let dictionary = Self::from_lines(language, read_file(filepath)?)?;
		let bytes = postcard::to_stdvec(&dictionary)?;
		fs::write(&snapshot_path, bytes)?;

		info!(path = %filepath.display(), lemmas = dictionary.len(), "Loaded dictionary");
		Ok(dictionary)
	}

	/// Builds a dictionary from `lemma<TAB>forms` lines.
	///
	/// # Errors
	/// Returns `Format` with the 1-based line number for a line without a
	/// tab, with an empty lemma, or without any form.
	pub fn from_lines<I, S>(language: &str, lines: I) -> Result<Self, DictionaryError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut dictionary = Self::new(language);

		for (number, line) in lines.into_iter().enumerate() {
			let line = line.as_ref().trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}

			let format_error = |reason: &str| DictionaryError::Format {
				line: number + 1,
				reason: reason.to_owned(),
			};

			let (lemma, forms) = line.split_once('\t').ok_or_else(|| format_error("missing tab separator"))?;
			let lemma = lemma.trim();
			if lemma.is_empty() {
				return Err(format_error("empty lemma"));
			}

			let mut has_form = false;
			for form in forms.split_whitespace() {
				dictionary.put_lemma(lemma, form);
				has_form = true;
			}
			if !has_form {
				return Err(format_error("no surface forms"));
			}
		}

		Ok(dictionary)
	}

	/// Returns true if `lemma` is a known lemma.
	pub fn has_concept(&self, lemma: &str) -> bool {
		self.index.contains_key(lemma)
	}

	/// Returns the lemma associated with a surface form.
	///
	/// If several lemmas share the form, the first one inserted wins.
	pub fn get_lemma(&self, concept: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|entry| entry.forms.iter().any(|form| form == concept))
			.map(|entry| entry.lemma.as_str())
	}

	/// Associates a surface form with a lemma.
	///
	/// Adding an existing pair has no effect.
	pub fn put_lemma(&mut self, lemma: &str, concept: &str) {
		let position = match self.index.get(lemma) {
			Some(position) => *position,
			None => {
				self.entries.push(LemmaEntry { lemma: lemma.to_owned(), forms: Vec::new() });
				self.index.insert(lemma.to_owned(), self.entries.len() - 1);
				self.entries.len() - 1
			}
		};

		let forms = &mut self.entries[position].forms;
		if !forms.iter().any(|form| form == concept) {
			forms.push(concept.to_owned());
		}
	}

	/// Surface forms of `lemma`, in insertion order.
	pub fn forms(&self, lemma: &str) -> Option<&[String]> {
		self.index.get(lemma).map(|position| self.entries[*position].forms.as_slice())
	}

	/// Number of lemmas.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Dictionary {
		let mut dictionary = Dictionary::new("en");
		dictionary.put_lemma("run", "runs");
		dictionary.put_lemma("run", "ran");
		dictionary.put_lemma("be", "is");
		dictionary
	}

	#[test]
	fn lemma_lookup() {
		let dictionary = sample();
		assert_eq!(dictionary.language(), "en");
		assert!(dictionary.has_concept("run"));
		assert!(!dictionary.has_concept("runs"));
		assert_eq!(dictionary.get_lemma("ran"), Some("run"));
		assert_eq!(dictionary.get_lemma("is"), Some("be"));
		assert_eq!(dictionary.get_lemma("walk"), None);
	}

	#[test]
	fn duplicate_pairs_are_ignored() {
		let mut dictionary = sample();
		dictionary.put_lemma("run", "runs");
		assert_eq!(dictionary.forms("run").unwrap(), ["runs", "ran"]);
		assert_eq!(dictionary.len(), 2);
	}

	#[test]
	fn first_inserted_lemma_wins() {
		let mut dictionary = Dictionary::new("en");
		dictionary.put_lemma("saw", "saw");
		dictionary.put_lemma("see", "saw");
		assert_eq!(dictionary.get_lemma("saw"), Some("saw"));
	}

	#[test]
	fn parses_lines() {
		let lines = ["# comment", "", "run\truns ran running", "be\tis are"];
		let dictionary = Dictionary::from_lines("en", lines).unwrap();
		assert_eq!(dictionary.len(), 2);
		assert_eq!(dictionary.get_lemma("running"), Some("run"));
		assert_eq!(dictionary.forms("be").unwrap(), ["is", "are"]);
	}

	#[test]
	fn reports_malformed_line_number() {
		let lines = ["run\truns", "broken line"];
		match Dictionary::from_lines("en", lines) {
			Err(DictionaryError::Format { line, .. }) => assert_eq!(line, 2),
			other => panic!("expected format error, got {other:?}"),
		}
	}

	#[test]
	fn rejects_lemma_without_forms() {
		assert!(matches!(
			Dictionary::from_lines("en", ["run\t  "]),
			Err(DictionaryError::Format { line: 1, .. })
		));
	}
}
