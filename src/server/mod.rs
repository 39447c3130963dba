//! HTTP surface (Axum) over the [`ReliabilityEngine`](crate::engine::ReliabilityEngine).

pub mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use error::{ErrorResponse, ServerError};
pub use handler::{AnalyzeRequest, BiasRequest, MisinformationRequest};
pub use state::AppState;

/// Response header carrying the request id (echoed if the client sent a valid one).
pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// Response header naming the error class on failures.
pub const VERITY_STATUS_HEADER: &str = "x-verity-status";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/v1/analyze", post(handler::analyze_handler))
        .route("/v1/bias", post(handler::bias_handler))
        .route("/v1/misinformation", post(handler::misinformation_handler))
        .fallback(handler::not_found_handler)
        .layer(middleware::from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

async fn request_id(request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .unwrap_or_else(Uuid::new_v4);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
