use crate::infra::{AppState, ScoringState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use jee_scorecard::answer_key::session_id;
use jee_scorecard::error::AppError;
use jee_scorecard::scoring::{evaluate, ScoreSummary};
use jee_scorecard::sheet::{parse_sheet, GeneralInfo, ParsedSheet, QuestionResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct SheetRequest {
    /// Raw response-sheet document, fetched by the caller. The service
    /// never retrieves documents itself.
    pub(crate) html: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) html: String,
    /// Echo the parsed per-question responses alongside the score.
    #[serde(default)]
    pub(crate) include_questions: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) session: String,
    pub(crate) general_info: GeneralInfo,
    pub(crate) score: ScoreSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) questions: Option<Vec<QuestionResponse>>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/sheet/parse", axum::routing::post(parse_endpoint))
        .route("/api/v1/score", axum::routing::post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Raw extraction without scoring, for callers that persist or inspect
/// the parsed sheet directly.
pub(crate) async fn parse_endpoint(
    Json(payload): Json<SheetRequest>,
) -> Result<Json<ParsedSheet>, AppError> {
    let parsed = parse_sheet(&payload.html)?;
    Ok(Json(parsed))
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<ScoringState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        html,
        include_questions,
    } = payload;

    let parsed = parse_sheet(&html)?;
    let session = session_id(&parsed.general_info, &state.shifts)?;
    let key = state.answer_keys.lookup(&session)?;
    let score = evaluate(&parsed.questions, key).summary();

    let questions = if include_questions {
        Some(parsed.questions)
    } else {
        None
    };

    Ok(Json(ScoreResponse {
        session,
        general_info: parsed.general_info,
        score,
        questions,
    }))
}
