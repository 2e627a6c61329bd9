use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;

use darsana_server::api;

const BODY_LIMIT: usize = 64 * 1024;

type Scores = BTreeMap<String, f64>;

#[actix_web::test]
async fn liveness() {
	let app = test::init_service(App::new().configure(api::configure(BODY_LIMIT))).await;
	let req = test::TestRequest::get().uri("/test").to_request();
	let body = test::call_and_read_body(&app, req).await;
	assert_eq!(body, "Oh hi");
}

#[actix_web::test]
async fn get_scores_raw_frequency() {
	let app = test::init_service(App::new().configure(api::configure(BODY_LIMIT))).await;
	let req = test::TestRequest::get()
		.uri("/score/grams?src=The%20quick%20fox!&dst=the%20quick%20dog.&scoreBy=0&size=2")
		.to_request();
	let scores: Scores = test::call_and_read_body_json(&app, req).await;
	assert_eq!(scores, Scores::from([("the quick".to_owned(), 2.0)]));
}

#[actix_web::test]
async fn post_scores_with_string_numbers() {
	let app = test::init_service(App::new().configure(api::configure(BODY_LIMIT))).await;
	let req = test::TestRequest::post()
		.uri("/score/grams")
		.set_json(json!({
			"src": "The cat sat.",
			"dst": "the cat ran",
			"scoreBy": "0",
			"size": 1
		}))
		.to_request();
	let scores: Scores = test::call_and_read_body_json(&app, req).await;
	assert_eq!(scores, Scores::from([("cat".to_owned(), 2.0), ("the".to_owned(), 2.0)]));
}

#[actix_web::test]
async fn post_tf_idf_returns_finite_scores() {
	let app = test::init_service(App::new().configure(api::configure(BODY_LIMIT))).await;
	let req = test::TestRequest::post()
		.uri("/score/grams")
		.set_json(json!({
			"src": "the cat sat",
			"dst": "the cat ran",
			"scoreBy": 3,
			"size": 1
		}))
		.to_request();
	let scores: Scores = test::call_and_read_body_json(&app, req).await;
	assert_eq!(scores.len(), 2);
	assert!(scores.values().all(|v| v.is_finite() && *v > 0.0));
}

#[actix_web::test]
async fn get_rejects_bad_parameters() {
	let app = test::init_service(App::new().configure(api::configure(BODY_LIMIT))).await;
	let uris = [
		"/score/grams?src=a&dst=a&scoreBy=9&size=1",
		"/score/grams?src=a&dst=a&scoreBy=0&size=0",
		"/score/grams?src=a&dst=a&scoreBy=0&size=big",
		"/score/grams?src=a&scoreBy=0&size=1",
	];
	for uri in uris {
		let req = test::TestRequest::get().uri(uri).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
	}
}

#[actix_web::test]
async fn post_rejects_malformed_json() {
	let app = test::init_service(App::new().configure(api::configure(BODY_LIMIT))).await;
	let req = test::TestRequest::post()
		.uri("/score/grams")
		.insert_header(("content-type", "application/json"))
		.set_payload("{not json")
		.to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn post_rejects_oversized_body() {
	let app = test::init_service(App::new().configure(api::configure(16))).await;
	let req = test::TestRequest::post()
		.uri("/score/grams")
		.set_json(json!({ "src": "a much longer corpus than allowed", "dst": "a", "scoreBy": 0, "size": 1 }))
		.to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
