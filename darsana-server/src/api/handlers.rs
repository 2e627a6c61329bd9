use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{debug, error, warn};

use darsana_core::score;

use super::errors::ApiError;
use super::models::{ScoreBody, ScoreQuery, ScoreRequest};

/// HTTP GET endpoint `/test`
///
/// Liveness check.
#[get("/test")]
pub async fn test() -> impl Responder {
	HttpResponse::Ok().body("Oh hi")
}

/// HTTP GET endpoint `/score/grams`
///
/// Scores the grams shared by the `src` and `dst` query parameters.
/// `scoreBy` selects the method (0 to 3, or its name) and `size` the
/// gram size. Returns the score map as a JSON object.
#[get("/score/grams")]
pub async fn get_score_grams(query: web::Query<ScoreQuery>) -> Result<HttpResponse, ApiError> {
	let request = query.into_inner().into_request().inspect_err(log_rejected)?;
	respond(request)
}

/// HTTP POST endpoint `/score/grams`
///
/// Same as the GET endpoint with a JSON body, for corpora too large
/// for a query string. `scoreBy` and `size` may be numbers or strings.
#[post("/score/grams")]
pub async fn post_score_grams(body: web::Json<ScoreBody>) -> Result<HttpResponse, ApiError> {
	let request = body.into_inner().into_request().inspect_err(log_rejected)?;
	respond(request)
}

fn respond(request: ScoreRequest) -> Result<HttpResponse, ApiError> {
	let scores = score(&request.source, &request.destination, request.method, request.gram_size).map_err(|e| {
		let err = ApiError::from(e);
		match &err {
			ApiError::BadRequest(_) => log_rejected(&err),
			ApiError::Internal(message) => error!(method = %request.method, gram_size = request.gram_size, "Scoring failed: {message}"),
		}
		err
	})?;

	debug!(method = %request.method, gram_size = request.gram_size, scored = scores.len(), "Scored request");
	Ok(HttpResponse::Ok().json(scores))
}

fn log_rejected(err: &ApiError) {
	warn!("Rejected scoring request: {err}");
}
