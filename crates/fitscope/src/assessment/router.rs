use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::{SectionCategory, LIKERT_OPTIONS};
use super::domain::{QuestionId, ResponseSet, ResponseValue, SessionId};
use super::import::CsvResponseImporter;
use super::repository::{RepositoryError, SessionRepository};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing HTTP endpoints for the questionnaire flow and
/// one-shot scoring.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<R>))
        .route("/api/v1/assessments", post(start_handler::<R>))
        .route("/api/v1/assessments/score", post(score_handler::<R>))
        .route("/api/v1/assessments/:session_id", get(status_handler::<R>))
        .route(
            "/api/v1/assessments/:session_id/responses",
            put(record_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/report",
            post(finalize_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordResponseRequest {
    pub(crate) question_id: QuestionId,
    pub(crate) value: ResponseValue,
}

/// One-shot scoring payload: either an inline response map or a CSV export.
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(default)]
    pub(crate) responses: Option<ResponseSet>,
    #[serde(default)]
    pub(crate) responses_csv: Option<String>,
}

pub(crate) async fn catalog_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let catalog = service.catalog();
    let payload = json!({
        "questions": catalog.questions(),
        "sections": {
            "psychometric": SectionCategory::Psychometric.title(),
            "technical": SectionCategory::Technical.title(),
            "wiscar": SectionCategory::Wiscar.title(),
        },
        "likert_options": LIKERT_OPTIONS,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(record) => {
            let view = record.status_view(service.catalog());
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<RecordResponseRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.record_response(&id, request.question_id, request.value) {
        Ok(record) => {
            let view = record.status_view(service.catalog());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn finalize_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.finalize(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view(service.catalog());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let responses = if let Some(csv) = request.responses_csv {
        match CsvResponseImporter::from_reader(Cursor::new(csv.into_bytes())) {
            Ok(responses) => responses,
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        }
    } else {
        request.responses.unwrap_or_default()
    };

    let report = service.score_snapshot(&responses);
    (StatusCode::OK, axum::Json(report)).into_response()
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        AssessmentServiceError::UnknownQuestion(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::SessionCompleted(_) => StatusCode::CONFLICT,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
