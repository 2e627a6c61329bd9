use thiserror::Error;

/// Errors raised by the scoring engine.
///
/// Degenerate inputs (empty corpora, a gram size larger than the token
/// count) are not errors: they simply produce fewer grams.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
	#[error("Invalid gram size {0}: must be >= 1")]
	InvalidGramSize(usize),

	#[error("Unknown scoring method '{0}'")]
	UnknownMethod(String),

	#[error("Numeric domain error for gram '{gram}': {quantity} must be > 0, got {value}")]
	NumericDomain {
		gram: String,
		quantity: &'static str,
		value: f64,
	},

	/// A word of a shared gram has no unigram frequency.
	/// Cannot happen when both maps come from the same corpora.
	#[error("Internal consistency error: word '{word}' of gram '{gram}' has no unigram frequency")]
	MissingUnigram { gram: String, word: String },
}

impl ScoreError {
	/// True for errors caused by caller-supplied parameters
	/// (as opposed to numeric or internal failures).
	pub fn is_invalid_parameter(&self) -> bool {
		matches!(self, Self::InvalidGramSize(_) | Self::UnknownMethod(_))
	}
}

/// Errors raised while loading or saving a lemma dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
	#[error("IO Error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Dictionary format error at line {line}: {reason}")]
	Format { line: usize, reason: String },

	#[error("Snapshot Error: {0}")]
	Snapshot(#[from] postcard::Error),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
