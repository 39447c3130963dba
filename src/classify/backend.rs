use async_trait::async_trait;

use super::error::ClassifyError;

/// How the gateway should treat a backend status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    /// 2xx: parse the body.
    Success,
    /// 429 / 503: wait and try again.
    Retryable,
    /// Anything else: fatal for this call.
    Failed,
}

impl ResponseStatus {
    pub fn from_code(status: u16) -> Self {
        match status {
            200..=299 => ResponseStatus::Success,
            429 | 503 => ResponseStatus::Retryable,
            _ => ResponseStatus::Failed,
        }
    }
}

/// Raw status + body returned by a [`ClassifierBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status_class(&self) -> ResponseStatus {
        ResponseStatus::from_code(self.status)
    }
}

/// External text-classification capability.
///
/// Implementations perform exactly one request per call and surface the status code;
/// retry policy lives in [`ClassificationGateway`](super::ClassificationGateway).
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    async fn infer(
        &self,
        model_id: &str,
        payload: &serde_json::Value,
    ) -> Result<BackendResponse, ClassifyError>;
}
