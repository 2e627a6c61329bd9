//! HTTP surface of the scoring engine.

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

pub mod errors;
pub mod handlers;
pub mod models;

/// Registers the endpoints and the JSON body limit on an actix `App`.
///
/// Malformed or oversized JSON bodies are answered with a plain-text 400.
pub fn configure(max_body_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
	move |cfg| {
		let json_config = web::JsonConfig::default()
			.limit(max_body_bytes)
			.error_handler(|err, _req| {
				let response = HttpResponse::BadRequest().body(format!("Invalid JSON body: {err}"));
				InternalError::from_response(err, response).into()
			});

		cfg.app_data(json_config)
			.service(handlers::test)
			.service(handlers::get_score_grams)
			.service(handlers::post_score_grams);
	}
}

/// CORS policy: any origin, GET and POST only.
pub fn cors() -> Cors {
	Cors::default()
		.allow_any_origin()
		.allow_any_header()
		.allowed_methods(vec!["GET", "POST"])
		.max_age(3600)
}
