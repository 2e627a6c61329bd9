use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Scoring algorithm applied to the grams shared by two corpora.
///
/// The numeric codes (0 to 3) are the ones accepted on the wire
/// as `scoreBy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreMethod {
	/// Combined occurrence count, single occurrences dropped.
	RawFrequency,
	/// Harmonic mean of the unigram frequencies of the gram's words.
	RelativeFrequency,
	/// Jaro-Winkler similarity of lexicographically adjacent grams.
	StringDistance,
	/// Term frequency / inverse document frequency.
	TfIdf,
}

impl ScoreMethod {
	pub const ALL: [ScoreMethod; 4] = [
		ScoreMethod::RawFrequency,
		ScoreMethod::RelativeFrequency,
		ScoreMethod::StringDistance,
		ScoreMethod::TfIdf,
	];

	/// Wire code of the method.
	pub fn code(self) -> i64 {
		match self {
			Self::RawFrequency => 0,
			Self::RelativeFrequency => 1,
			Self::StringDistance => 2,
			Self::TfIdf => 3,
		}
	}

	/// Canonical upper-case name.
	pub fn name(self) -> &'static str {
		match self {
			Self::RawFrequency => "RAW_FREQUENCY",
			Self::RelativeFrequency => "RELATIVE_FREQUENCY",
			Self::StringDistance => "STRING_DISTANCE",
			Self::TfIdf => "TF_IDF",
		}
	}
}

impl TryFrom<i64> for ScoreMethod {
	type Error = ScoreError;

	fn try_from(code: i64) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|method| method.code() == code)
			.ok_or_else(|| ScoreError::UnknownMethod(code.to_string()))
	}
}

/// Accepts the canonical name in any case (`-` and `_` are interchangeable)
/// or the numeric code.
impl FromStr for ScoreMethod {
	type Err = ScoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if let Ok(code) = trimmed.parse::<i64>() {
			return Self::try_from(code);
		}
		let normalized = trimmed.replace('-', "_").to_ascii_uppercase();
		Self::ALL
			.into_iter()
			.find(|method| method.name() == normalized)
			.ok_or_else(|| ScoreError::UnknownMethod(trimmed.to_owned()))
	}
}

impl fmt::Display for ScoreMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, ScoreMethod::RawFrequency)]
	#[case(1, ScoreMethod::RelativeFrequency)]
	#[case(2, ScoreMethod::StringDistance)]
	#[case(3, ScoreMethod::TfIdf)]
	fn codes_round_trip(#[case] code: i64, #[case] method: ScoreMethod) {
		assert_eq!(ScoreMethod::try_from(code).unwrap(), method);
		assert_eq!(method.code(), code);
	}

	#[rstest]
	#[case(-1)]
	#[case(4)]
	fn unknown_codes_are_rejected(#[case] code: i64) {
		let err = ScoreMethod::try_from(code).unwrap_err();
		assert!(err.is_invalid_parameter());
	}

	#[rstest]
	#[case("RAW_FREQUENCY", ScoreMethod::RawFrequency)]
	#[case("relative-frequency", ScoreMethod::RelativeFrequency)]
	#[case("string_distance", ScoreMethod::StringDistance)]
	#[case("Tf-Idf", ScoreMethod::TfIdf)]
	#[case(" 3 ", ScoreMethod::TfIdf)]
	fn parses_names_and_codes(#[case] input: &str, #[case] method: ScoreMethod) {
		assert_eq!(input.parse::<ScoreMethod>().unwrap(), method);
	}

	#[test]
	fn rejects_unknown_name() {
		assert_eq!(
			"cosine".parse::<ScoreMethod>().unwrap_err(),
			ScoreError::UnknownMethod("cosine".to_owned())
		);
	}

	#[test]
	fn serializes_as_canonical_name() {
		let json = serde_json::to_string(&ScoreMethod::TfIdf).unwrap();
		assert_eq!(json, "\"TF_IDF\"");
		let back: ScoreMethod = serde_json::from_str("\"STRING_DISTANCE\"").unwrap();
		assert_eq!(back, ScoreMethod::StringDistance);
	}
}
