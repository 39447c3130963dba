use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use super::*;
use crate::classify::{MockClassifierBackend, MockReply};
use crate::config::Config;
use crate::constants::ZERO_SHOT_MODEL;
use crate::engine::ReliabilityEngine;
use crate::evidence::MockEvidenceSource;

const SKY_TEXT: &str = "The sky appears blue due to Rayleigh scattering.";

fn test_router() -> Router {
    let backend = Arc::new(MockClassifierBackend::new());
    backend.set_default(ZERO_SHOT_MODEL, MockReply::label("ENTAILMENT", 0.91));
    let source = Arc::new(MockEvidenceSource::new().with_entry("the sky is blue and", SKY_TEXT));

    let config = Config {
        retry_backoff: Duration::ZERO,
        ..Config::default()
    };
    create_router(AppState::new(ReliabilityEngine::new(
        &config, backend, source,
    )))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let response = test_router()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_request_id_is_echoed_when_valid() {
    let id = "6f1c1f53-3c2a-4f7e-9a59-0d7f5f0f6b11";
    let request = Request::get("/healthz")
        .header(REQUEST_ID_HEADER, id)
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], id);

    let request = Request::get("/healthz")
        .header(REQUEST_ID_HEADER, "not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();
    let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn test_analyze_endpoint() {
    let response = test_router()
        .oneshot(post_json(
            "/v1/analyze",
            json!({"transcript": "The sky is blue and calm today."}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["clean_text"], "sky blue calm today");
    assert_eq!(body["ocr_text"], "");
    assert_eq!(body["bias_report"]["emotional_tone"], "neutral");
    assert_eq!(body["misinformation"][0]["verdict"], "supported");
    assert_eq!(body["misinformation"][0]["evidence_snippet"], SKY_TEXT);
    assert_eq!(body["misinformation_score"], 0);
    assert_eq!(body["final_reliability_score"], 100);
}

#[tokio::test]
async fn test_analyze_accepts_empty_object() {
    let response = test_router()
        .oneshot(post_json("/v1/analyze", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["clean_text"], "");
    assert_eq!(body["final_reliability_score"], 100);
}

#[tokio::test]
async fn test_bias_endpoint_empty_batch() {
    let response = test_router()
        .oneshot(post_json("/v1/bias", json!({"sentences": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "emotional_tone": "neutral",
            "manipulative_language": false,
            "political_bias": "neutral",
            "opinion_disguised_as_fact": [],
            "bias_score": 0
        })
    );
}

#[tokio::test]
async fn test_misinformation_endpoint() {
    let response = test_router()
        .oneshot(post_json(
            "/v1/misinformation",
            json!({
                "clean_text": "sky blue calm today",
                "sentences": ["the sky is blue and calm today.", "too short."]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["misinformation"].as_array().unwrap().len(), 1);
    assert_eq!(body["misinformation"][0]["confidence"], json!(0.91));
    assert_eq!(body["final_reliability_score"], 100);
}

#[tokio::test]
async fn test_schema_violation_is_bad_request() {
    let response = test_router()
        .oneshot(post_json("/v1/bias", json!({"sentences": "not a list"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[VERITY_STATUS_HEADER], "invalid_request");
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
    assert!(body["error"].as_str().unwrap().contains("invalid request"));
}

#[tokio::test]
async fn test_missing_field_and_unknown_field_rejected() {
    let response = test_router()
        .oneshot(post_json("/v1/misinformation", json!({"clean_text": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = test_router()
        .oneshot(post_json("/v1/analyze", json!({"video_url": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/analyze")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let response = test_router()
        .oneshot(Request::get("/v2/nothing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], 404);
    assert!(body["error"].as_str().unwrap().contains("/v2/nothing"));
}

#[test]
fn test_error_response_shape() {
    let value = serde_json::to_value(ErrorResponse {
        error: "invalid request: x".to_string(),
        code: 400,
    })
    .unwrap();
    assert_eq!(value, json!({"error": "invalid request: x", "code": 400}));
}
