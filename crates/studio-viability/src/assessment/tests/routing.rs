use super::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::{assessment_router, AssessmentService, DEFAULT_BOOKING_URL};

fn router() -> axum::Router {
    assessment_router(Arc::new(AssessmentService::default()))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn questions_endpoint_lists_table_in_order() {
    let request = Request::builder()
        .uri("/api/v1/assessment/questions")
        .body(Body::empty())
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 12);
    assert_eq!(questions[0]["id"], "context_location");
    assert_eq!(questions[5]["multiple"], true);
}

#[tokio::test]
async fn evaluate_endpoint_returns_verdict() {
    let request = post_json(
        "/api/v1/assessment/evaluate",
        json!({ "answers": supportive_answers(), "include_breakdown": true }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["verdict"]["light"], "GREEN");
    assert_eq!(body["verdict"]["meta"]["capability_tier"], "A");
    assert_eq!(body["booking_url"], DEFAULT_BOOKING_URL);
    assert_eq!(
        body["breakdown"]["answers"]
            .as_array()
            .expect("answers array")
            .len(),
        12
    );
}

#[tokio::test]
async fn evaluate_endpoint_omits_breakdown_by_default() {
    let request = post_json(
        "/api/v1/assessment/evaluate",
        json!({ "answers": { "context_location": "shared_building" } }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["verdict"]["light"], "RED");
    assert_eq!(body["verdict"]["meta"]["hard_stop_triggered"], true);
    assert!(body.get("breakdown").is_none());
}

#[tokio::test]
async fn evaluate_endpoint_rejects_incomplete_answers_when_strict() {
    let request = post_json(
        "/api/v1/assessment/evaluate",
        json!({ "answers": { "floor_type": "slab" }, "require_complete": true }),
    );

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    let missing = body["missing"].as_array().expect("missing array");
    assert_eq!(missing.len(), 11);
    assert_eq!(missing[0], "context_location");
}

#[tokio::test]
async fn booking_endpoint_returns_link() {
    let service = AssessmentService::new(
        crate::assessment::AssessmentEngine::standard(),
        "https://example.com/book",
    );
    let request = Request::builder()
        .uri("/api/v1/assessment/booking")
        .body(Body::empty())
        .expect("request builds");

    let response = assessment_router(Arc::new(service))
        .oneshot(request)
        .await
        .expect("router responds");

    let body = json_body(response).await;
    assert_eq!(body["url"], "https://example.com/book");
}
