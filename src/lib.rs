//! Verity library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`merge_text`], [`normalize`] - Transcript/OCR merge and sentence normalization
//! - [`extract_claims`] - Candidate claim selection
//! - [`BiasAggregator`], [`BiasReport`] - Bias signal aggregation
//! - [`MisinformationDetector`], [`MisinformationReport`] - Claim verification
//! - [`ReliabilityEngine`], [`AnalysisReport`] - Wiring of the whole analysis
//!
//! ## External Capabilities
//! - [`ClassifierBackend`], [`HttpClassifier`], [`ClassificationGateway`] - Inference calls
//!   with retry and response normalization
//! - [`EvidenceSource`], [`WikipediaSource`], [`EvidenceFetcher`] - Evidence lookup behind
//!   a bounded LRU cache
//!
//! ## Scoring
//! - [`bias_score`], [`misinformation_score`], [`final_reliability_score`]
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod bias;
pub mod claims;
pub mod classify;
pub mod config;
pub mod constants;
pub mod engine;
pub mod evidence;
pub mod misinfo;
pub mod scoring;
pub mod server;
pub mod text;
pub mod verdict;

pub use bias::{BiasAggregator, BiasReport, SentenceSignals, stable_mode};
pub use claims::{evidence_query, extract_claims, is_claim_candidate};
#[cfg(any(test, feature = "mock"))]
pub use classify::{MockClassifierBackend, MockReply};
pub use classify::{
    BackendResponse, Classification, ClassificationGateway, ClassifierBackend, ClassifierResponse,
    ClassifyError, HttpClassifier, ResponseStatus, RetryPolicy,
};
pub use config::{Config, ConfigError};
pub use engine::{AnalysisReport, EngineError, ReliabilityEngine};
#[cfg(any(test, feature = "mock"))]
pub use evidence::MockEvidenceSource;
pub use evidence::{EvidenceError, EvidenceFetcher, EvidenceSource, WikipediaSource};
pub use misinfo::{ClaimFinding, MisinformationDetector, MisinformationReport};
pub use scoring::{
    BiasSignalCounts, VerdictCounts, bias_score, final_reliability_score, misinformation_score,
};
pub use server::{AppState, create_router};
pub use text::{NormalizedText, Sentence, merge_text, normalize};
pub use verdict::{Verdict, VerdictEngine, VerdictKind};
