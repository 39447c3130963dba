use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_BACKOFF_MS};

use super::backend::{ClassifierBackend, ResponseStatus};
use super::error::ClassifyError;
use super::response::{Classification, ClassifierResponse};

/// Bounded retry with a fixed delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay after a retryable response.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_ATTEMPTS,
            backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }
}

/// Retrying, shape-normalizing front for a [`ClassifierBackend`].
///
/// Backoff sleeps belong to the calling task only; concurrent calls are not delayed.
#[derive(Clone)]
pub struct ClassificationGateway {
    backend: Arc<dyn ClassifierBackend>,
    policy: RetryPolicy,
}

impl std::fmt::Debug for ClassificationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationGateway")
            .field("policy", &self.policy)
            .finish()
    }
}

impl ClassificationGateway {
    pub fn new(backend: Arc<dyn ClassifierBackend>, policy: RetryPolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Classifies `payload` with `model_id` and returns the top label.
    ///
    /// Rate-limited / unavailable responses are retried; any other non-success status,
    /// a transport error, or an unrecognized body fails the call immediately.
    pub async fn classify(
        &self,
        model_id: &str,
        payload: &serde_json::Value,
    ) -> Result<Classification, ClassifyError> {
        let attempts = self.policy.max_attempts;

        for attempt in 1..=attempts {
            let response = self.backend.infer(model_id, payload).await?;

            match response.status_class() {
                ResponseStatus::Success => {
                    let top = ClassifierResponse::parse(model_id, &response.body)?.top(model_id)?;
                    debug!(
                        model = model_id,
                        attempt,
                        label = %top.label,
                        score = top.score,
                        "Classification complete"
                    );
                    return Ok(top);
                }
                ResponseStatus::Retryable => {
                    warn!(
                        model = model_id,
                        attempt,
                        max_attempts = attempts,
                        status = response.status,
                        "Classification endpoint busy, backing off"
                    );
                    if attempt < attempts {
                        tokio::time::sleep(self.policy.backoff).await;
                    }
                }
                ResponseStatus::Failed => {
                    return Err(ClassifyError::Api {
                        model: model_id.to_string(),
                        status: response.status,
                        body: response.body,
                    });
                }
            }
        }

        Err(ClassifyError::RetriesExhausted {
            model: model_id.to_string(),
            attempts,
        })
    }
}
