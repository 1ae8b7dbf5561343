use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::answers::AnswerError;
use super::service::{AssessmentRequest, AssessmentService};

/// Router builder exposing the questionnaire and the evaluator over HTTP.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/evaluate", post(evaluate_handler))
        .route("/api/v1/assessment/booking", get(booking_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    (StatusCode::OK, axum::Json(service.questions())).into_response()
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    match service.assess(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AnswerError::Incomplete { missing }) => {
            let payload = json!({
                "error": "required questions unanswered",
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn booking_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let payload = json!({ "url": service.booking_url() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
