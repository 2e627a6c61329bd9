use serde::Deserialize;

use darsana_core::normalize::{normalize_body_text, normalize_query_text};
use darsana_core::ScoreMethod;

use super::errors::ApiError;

/// Query parameters of `GET /score/grams`.
///
/// Everything arrives as text; numbers are parsed in `into_request`.
#[derive(Deserialize, Debug)]
pub struct ScoreQuery {
	pub src: Option<String>,
	pub dst: Option<String>,
	#[serde(rename = "scoreBy")]
	pub score_by: Option<String>,
	pub size: Option<String>,
}

/// A numeric field of a JSON body, given either as a number or as a string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NumberParam {
	Integer(i64),
	Text(String),
}

/// JSON body of `POST /score/grams`.
#[derive(Deserialize, Debug)]
pub struct ScoreBody {
	pub src: Option<String>,
	pub dst: Option<String>,
	#[serde(rename = "scoreBy")]
	pub score_by: Option<NumberParam>,
	pub size: Option<NumberParam>,
}

/// A validated scoring request, with normalized corpora.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRequest {
	pub source: String,
	pub destination: String,
	pub method: ScoreMethod,
	pub gram_size: usize,
}

impl ScoreQuery {
	/// Validates the parameters and normalizes both texts with
	/// `normalize_query_text` (punctuation deleted).
	pub fn into_request(self) -> Result<ScoreRequest, ApiError> {
		let source = required(self.src, "src")?;
		let destination = required(self.dst, "dst")?;
		let method = parse_method(&NumberParam::Text(required(self.score_by, "scoreBy")?))?;
		let gram_size = parse_size(&NumberParam::Text(required(self.size, "size")?))?;

		Ok(ScoreRequest {
			source: normalize_query_text(&source),
			destination: normalize_query_text(&destination),
			method,
			gram_size,
		})
	}
}

impl ScoreBody {
	/// Validates the body and normalizes both texts with
	/// `normalize_body_text` (punctuation replaced by a space).
	pub fn into_request(self) -> Result<ScoreRequest, ApiError> {
		let source = required(self.src, "src")?;
		let destination = required(self.dst, "dst")?;
		let method = parse_method(&required(self.score_by, "scoreBy")?)?;
		let gram_size = parse_size(&required(self.size, "size")?)?;

		Ok(ScoreRequest {
			source: normalize_body_text(&source),
			destination: normalize_body_text(&destination),
			method,
			gram_size,
		})
	}
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
	value.ok_or_else(|| ApiError::BadRequest(format!("Missing parameter '{name}'")))
}

/// Accepts a method code (`0`..`3`) or a method name (`TF_IDF`).
fn parse_method(param: &NumberParam) -> Result<ScoreMethod, ApiError> {
	let method = match param {
		NumberParam::Integer(code) => ScoreMethod::try_from(*code),
		NumberParam::Text(text) => text.parse::<ScoreMethod>(),
	};
	method.map_err(ApiError::from)
}

/// Parses the gram size. Zero is left for the scorer to reject.
fn parse_size(param: &NumberParam) -> Result<usize, ApiError> {
	let value = match param {
		NumberParam::Integer(n) => *n,
		NumberParam::Text(text) => text
			.trim()
			.parse::<i64>()
			.map_err(|_| ApiError::BadRequest(format!("Parameter 'size' must be an integer, got '{text}'")))?,
	};
	usize::try_from(value).map_err(|_| ApiError::BadRequest(format!("Parameter 'size' must be >= 1, got {value}")))
}
