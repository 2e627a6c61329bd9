//! API error type mapped to HTTP status codes.
//!
//! Errors are returned as plain-text bodies.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use darsana_core::ScoreError;

/// - `BadRequest` → 400, request validation and invalid scoring parameters
/// - `Internal` → 500, numeric-domain and consistency failures of the scorer
#[derive(Error, Debug)]
pub enum ApiError {
	#[error("{0}")]
	BadRequest(String),

	#[error("{0}")]
	Internal(String),
}

impl From<ScoreError> for ApiError {
	fn from(err: ScoreError) -> Self {
		if err.is_invalid_parameter() {
			ApiError::BadRequest(err.to_string())
		} else {
			ApiError::Internal(err.to_string())
		}
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.insert_header(ContentType::plaintext())
			.body(self.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn score_errors_map_to_status() {
		let bad: ApiError = ScoreError::InvalidGramSize(0).into();
		assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

		let internal: ApiError = ScoreError::NumericDomain {
			gram: "g".to_owned(),
			quantity: "term frequency",
			value: 0.0,
		}
		.into();
		assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
