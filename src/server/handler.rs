use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::error::ServerError;
use super::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub ocr_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiasRequest {
    pub sentences: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MisinformationRequest {
    #[serde(default)]
    pub clean_text: String,
    pub sentences: Vec<String>,
}

/// Unwraps the JSON body and decodes it into `T`, reporting both failures as 400s.
fn parse_body<T: DeserializeOwned>(
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<T, ServerError> {
    let Json(value) = body.map_err(|e| ServerError::InvalidRequest(e.body_text()))?;
    serde_json::from_value(value)
        .map_err(|e| ServerError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

#[instrument(skip(state, body))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, ServerError> {
    let request: AnalyzeRequest = parse_body(body)?;
    debug!(
        transcript_len = request.transcript.as_deref().map_or(0, str::len),
        ocr_len = request.ocr_text.as_deref().map_or(0, str::len),
        "Analyze request"
    );

    let report = state
        .engine
        .analyze(request.transcript.as_deref(), request.ocr_text.as_deref())
        .await;

    Ok(Json(report).into_response())
}

#[instrument(skip(state, body))]
pub async fn bias_handler(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, ServerError> {
    let request: BiasRequest = parse_body(body)?;
    debug!(sentences = request.sentences.len(), "Bias request");

    let report = state.engine.analyze_bias(&request.sentences).await;

    Ok(Json(report).into_response())
}

#[instrument(skip(state, body))]
pub async fn misinformation_handler(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, ServerError> {
    let request: MisinformationRequest = parse_body(body)?;
    debug!(sentences = request.sentences.len(), "Misinformation request");

    let report = state
        .engine
        .detect_misinformation(&request.clean_text, &request.sentences)
        .await;

    Ok(Json(report).into_response())
}

pub async fn not_found_handler(uri: axum::http::Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
