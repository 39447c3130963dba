use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::classify::{MockClassifierBackend, MockReply};
use crate::config::ConfigError;
use crate::constants::{EMOTION_MODEL, SENTIMENT_MODEL, ZERO_SHOT_MODEL};
use crate::evidence::MockEvidenceSource;
use crate::verdict::VerdictKind;

const SKY_TEXT: &str = "The sky appears blue due to Rayleigh scattering.";

fn test_config() -> Config {
    Config {
        retry_backoff: Duration::ZERO,
        ..Config::default()
    }
}

fn engine_with(
    backend: Arc<MockClassifierBackend>,
    source: Arc<MockEvidenceSource>,
) -> ReliabilityEngine {
    ReliabilityEngine::new(&test_config(), backend, source)
}

fn assert_send<T: Send>(_: &T) {}

#[test]
fn test_engine_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<ReliabilityEngine>();

    let engine = engine_with(Arc::new(MockClassifierBackend::calm()), Arc::new(MockEvidenceSource::new()));
    let future = engine.analyze(None, None);
    assert_send(&future);
}

#[test]
fn test_from_config_with_token() {
    let config = Config {
        api_token: "hf_test".to_string(),
        ..Config::default()
    };
    assert!(ReliabilityEngine::from_config(&config).is_ok());
}

#[test]
fn test_from_config_requires_token() {
    assert!(matches!(
        ReliabilityEngine::from_config(&Config::default()),
        Err(EngineError::Config(ConfigError::MissingEnvVar { .. }))
    ));
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let config = Config {
        retry_attempts: 0,
        ..Config::default()
    };
    assert!(matches!(
        ReliabilityEngine::from_config(&config),
        Err(EngineError::Config(_))
    ));

    let config = Config {
        evidence_url: "not a url".to_string(),
        ..Config::default()
    };
    assert!(ReliabilityEngine::from_config(&config).is_err());
}

#[tokio::test]
async fn test_analyze_empty_input() {
    let backend = Arc::new(MockClassifierBackend::calm());
    let engine = engine_with(backend.clone(), Arc::new(MockEvidenceSource::new()));

    let report = engine.analyze(None, Some("   ")).await;

    assert_eq!(report.clean_text, "");
    assert_eq!(report.bias_report, BiasReport::neutral());
    assert!(report.misinformation.is_empty());
    assert_eq!(report.misinformation_score, 0);
    assert_eq!(report.final_reliability_score, 100);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_analyze_supported_claim() {
    let backend = Arc::new(MockClassifierBackend::calm());
    backend.add_rule(ZERO_SHOT_MODEL, "premise", MockReply::label("ENTAILMENT", 0.97));
    let source = Arc::new(MockEvidenceSource::new().with_entry("the sky is blue and", SKY_TEXT));
    let engine = engine_with(backend.clone(), source.clone());

    let report = engine
        .analyze(Some("The sky is blue and calm today."), None)
        .await;

    assert_eq!(report.transcript, "The sky is blue and calm today.");
    assert_eq!(report.ocr_text, "");
    assert_eq!(report.clean_text, "sky blue calm today");
    assert_eq!(report.misinformation.len(), 1);
    assert_eq!(report.misinformation[0].claim, "the sky is blue and calm today.");
    assert_eq!(report.misinformation[0].verdict, VerdictKind::Supported);
    assert_eq!(report.final_reliability_score, 100);
    // No bias keyword, so only the verdict call is made.
    assert_eq!(backend.call_count(), 1);
    assert_eq!(engine.evidence_cache_len().await, 1);
}

#[tokio::test]
async fn test_analyze_runs_both_pipelines() {
    let backend = Arc::new(MockClassifierBackend::calm());
    backend.add_rule(ZERO_SHOT_MODEL, "premise", MockReply::label("CONTRADICTION", 0.88));
    backend.add_rule(SENTIMENT_MODEL, "lies", MockReply::label("NEGATIVE", 0.99));
    backend.add_rule(EMOTION_MODEL, "lies", MockReply::label("anger", 0.91));

    let source = Arc::new(
        MockEvidenceSource::new()
            .with_entry("the government always lies and", "Governments publish budgets."),
    );
    let engine = engine_with(backend, source);

    let report = engine
        .analyze(
            Some("The government always lies and is hiding the taxes."),
            Some("Prices rose 12 percent in 2023 across the country."),
        )
        .await;

    assert_eq!(report.bias_report.emotional_tone, "negative");
    assert!(report.bias_report.manipulative_language);
    assert_eq!(report.bias_report.bias_score, 15);

    assert_eq!(report.misinformation.len(), 2);
    assert_eq!(report.misinformation[0].verdict, VerdictKind::Misinformation);
    assert_eq!(report.misinformation[1].verdict, VerdictKind::Uncertain);
    assert_eq!(report.misinformation[1].evidence_snippet, None);
    assert_eq!(report.misinformation_score, 25);
    assert_eq!(report.final_reliability_score, 75);
    assert_eq!(report.misinformation_report().misinformation_score, 25);
}

#[tokio::test]
async fn test_repeated_analysis_reuses_evidence() {
    let backend = Arc::new(MockClassifierBackend::calm());
    backend.add_rule(ZERO_SHOT_MODEL, "premise", MockReply::label("ENTAILMENT", 0.9));
    let source = Arc::new(MockEvidenceSource::new().with_entry("the sky is blue and", SKY_TEXT));
    let engine = engine_with(backend, source.clone());

    let first = engine.analyze(Some("The sky is blue and calm today."), None).await;
    let second = engine.analyze(Some("The sky is blue and calm today."), None).await;

    assert_eq!(first, second);
    assert_eq!(source.lookup_count(), 1);
}

#[tokio::test]
async fn test_direct_operations() {
    let backend = Arc::new(MockClassifierBackend::calm());
    let engine = engine_with(backend, Arc::new(MockEvidenceSource::new()));

    let bias = engine.analyze_bias(&[]).await;
    let misinfo = engine
        .detect_misinformation("", &["the vote was held on 3 march 2020".to_string()])
        .await;

    assert_eq!(bias, BiasReport::neutral());
    assert_eq!(misinfo.misinformation.len(), 1);
    assert_eq!(misinfo.misinformation_score, 5);
}
