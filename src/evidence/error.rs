use thiserror::Error;

/// Failure of an evidence lookup.
///
/// The fetcher never surfaces these to callers; they are logged and cached as
/// "no evidence".
#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("evidence request for '{query}' failed: {message}")]
    Transport { query: String, message: String },

    #[error("failed to decode evidence for '{query}': {message}")]
    Decode { query: String, message: String },

    #[error("invalid evidence base URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("failed to build evidence client: {reason}")]
    ClientBuild { reason: String },
}
