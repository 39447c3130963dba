use thiserror::Error;

/// Failure of a single classification call.
///
/// Callers treat every variant as a per-item failure: the sentence or claim in question
/// is skipped, the batch continues.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classification request to '{model}' failed: {message}")]
    Transport { model: String, message: String },

    #[error("classification API error ({model}): {status} - {body}")]
    Api {
        model: String,
        status: u16,
        body: String,
    },

    #[error("classification failed after {attempts} attempts for '{model}'")]
    RetriesExhausted { model: String, attempts: u32 },

    #[error("unexpected classification response from '{model}': {reason}")]
    MalformedResponse { model: String, reason: String },

    #[error("failed to build classification client: {reason}")]
    ClientBuild { reason: String },
}

impl ClassifyError {
    /// Model id the failing call targeted, if any.
    pub fn model(&self) -> Option<&str> {
        match self {
            ClassifyError::Transport { model, .. }
            | ClassifyError::Api { model, .. }
            | ClassifyError::RetriesExhausted { model, .. }
            | ClassifyError::MalformedResponse { model, .. } => Some(model),
            ClassifyError::ClientBuild { .. } => None,
        }
    }
}
