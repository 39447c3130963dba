//! Reliability engine: wires the classifier and evidence capabilities into the bias
//! and misinformation pipelines.
//!
//! Both capabilities are constructed once and injected; the engine itself holds no
//! mutable state besides the evidence cache.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult};
pub use types::AnalysisReport;

use std::sync::Arc;
use tracing::{info, instrument};

use crate::bias::{BiasAggregator, BiasReport};
use crate::classify::{ClassificationGateway, ClassifierBackend, HttpClassifier, RetryPolicy};
use crate::config::Config;
use crate::evidence::{EvidenceFetcher, EvidenceSource, WikipediaSource};
use crate::misinfo::{MisinformationDetector, MisinformationReport};
use crate::text::{merge_text, normalize};
use crate::verdict::VerdictEngine;

#[derive(Debug, Clone)]
pub struct ReliabilityEngine {
    bias: BiasAggregator,
    misinfo: MisinformationDetector,
}

impl ReliabilityEngine {
    /// Builds the HTTP classifier and Wikipedia source described by `config`.
    pub fn from_config(config: &Config) -> EngineResult<Self> {
        config.validate()?;

        let classifier = HttpClassifier::new(
            config.inference_url.as_str(),
            config.api_token.as_str(),
            config.classify_timeout,
        )?;
        let evidence = WikipediaSource::new(&config.evidence_url, config.evidence_timeout)?;

        info!(
            inference_url = %classifier.base_url(),
            evidence_url = %config.evidence_url,
            "Reliability engine configured"
        );

        Ok(Self::new(config, Arc::new(classifier), Arc::new(evidence)))
    }

    /// Wires injected capabilities using the limits in `config`.
    pub fn new(
        config: &Config,
        classifier: Arc<dyn ClassifierBackend>,
        evidence: Arc<dyn EvidenceSource>,
    ) -> Self {
        let gateway = ClassificationGateway::new(
            classifier,
            RetryPolicy::new(config.retry_attempts, config.retry_backoff),
        );
        let fetcher = EvidenceFetcher::new(
            evidence,
            config.evidence_cache_capacity,
            config.evidence_timeout,
        );

        Self {
            bias: BiasAggregator::with_concurrency(gateway.clone(), config.max_concurrency),
            misinfo: MisinformationDetector::with_concurrency(
                fetcher,
                VerdictEngine::new(gateway),
                config.max_concurrency,
            ),
        }
    }

    pub async fn analyze_bias(&self, sentences: &[String]) -> BiasReport {
        self.bias.analyze_bias(sentences).await
    }

    pub async fn detect_misinformation(
        &self,
        clean_text: &str,
        sentences: &[String],
    ) -> MisinformationReport {
        self.misinfo.detect_misinformation(clean_text, sentences).await
    }

    /// Merges, normalizes, and runs both pipelines concurrently.
    #[instrument(skip_all)]
    pub async fn analyze(
        &self,
        transcript: Option<&str>,
        ocr_text: Option<&str>,
    ) -> AnalysisReport {
        let merged = merge_text(transcript, ocr_text);
        let normalized = normalize(&merged);
        let sentences = normalized.raw_sentences();

        let (bias_report, misinformation) = tokio::join!(
            self.analyze_bias(&sentences),
            self.detect_misinformation(&normalized.clean_text, &sentences),
        );

        info!(
            sentences = sentences.len(),
            bias_score = bias_report.bias_score,
            misinformation_score = misinformation.misinformation_score,
            findings = misinformation.misinformation.len(),
            "Analysis complete"
        );

        AnalysisReport::new(
            transcript.unwrap_or_default().to_string(),
            ocr_text.unwrap_or_default().to_string(),
            normalized.clean_text,
            bias_report,
            misinformation,
        )
    }

    /// Number of cached evidence queries.
    pub async fn evidence_cache_len(&self) -> u64 {
        self.misinfo.fetcher().len().await
    }
}
