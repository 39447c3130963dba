use thiserror::Error;

use crate::classify::ClassifyError;
use crate::config::ConfigError;
use crate::evidence::EvidenceError;

/// Startup failure while wiring the engine. Analysis itself never fails.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("classifier setup failed: {0}")]
    Classifier(#[from] ClassifyError),

    #[error("evidence source setup failed: {0}")]
    Evidence(#[from] EvidenceError),
}

pub type EngineResult<T> = Result<T, EngineError>;
