use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::classify::{MockClassifierBackend, MockReply, RetryPolicy};

const CLAIM: &str = "the sky is blue and calm today.";
const EVIDENCE: &str = "The sky appears blue due to Rayleigh scattering.";

fn engine_over(backend: Arc<MockClassifierBackend>) -> VerdictEngine {
    VerdictEngine::new(ClassificationGateway::new(
        backend,
        RetryPolicy::new(3, Duration::ZERO),
    ))
}

#[test]
fn test_label_mapping() {
    assert_eq!(VerdictKind::from_nli_label("ENTAILMENT"), VerdictKind::Supported);
    assert_eq!(VerdictKind::from_nli_label("entailment"), VerdictKind::Supported);
    assert_eq!(
        VerdictKind::from_nli_label("CONTRADICTION"),
        VerdictKind::Misinformation
    );
    assert_eq!(VerdictKind::from_nli_label("NEUTRAL"), VerdictKind::Uncertain);
    assert_eq!(VerdictKind::from_nli_label(""), VerdictKind::Uncertain);
}

#[test]
fn test_kind_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(VerdictKind::Misinformation).unwrap(),
        json!("misinformation")
    );
    assert_eq!(VerdictKind::Supported.to_string(), "supported");
}

#[test]
fn test_payload_places_evidence_as_premise() {
    let payload = nli_payload(CLAIM, EVIDENCE);
    assert_eq!(payload["inputs"]["premise"], EVIDENCE);
    assert_eq!(payload["inputs"]["hypothesis"], CLAIM);
}

#[tokio::test]
async fn test_no_evidence_is_uncertain_without_calls() {
    let backend = Arc::new(MockClassifierBackend::new());
    let engine = engine_over(backend.clone());

    let verdict = engine.judge(CLAIM, None).await.unwrap();

    assert_eq!(verdict, Verdict::no_evidence());
    assert_eq!(verdict.kind, VerdictKind::Uncertain);
    assert_eq!(verdict.confidence, 0.0);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_entailment_is_supported() {
    let backend = Arc::new(MockClassifierBackend::new());
    backend.set_default(ZERO_SHOT_MODEL, MockReply::label("ENTAILMENT", 0.93));
    let engine = engine_over(backend.clone());

    let verdict = engine.judge(CLAIM, Some(EVIDENCE)).await.unwrap();

    assert_eq!(verdict.kind, VerdictKind::Supported);
    assert!((verdict.confidence - 0.93).abs() < 1e-6);
    assert_eq!(backend.calls_for(ZERO_SHOT_MODEL), 1);
}

#[tokio::test]
async fn test_contradiction_is_misinformation() {
    let backend = Arc::new(MockClassifierBackend::new());
    backend.set_default(
        ZERO_SHOT_MODEL,
        MockReply::ok(json!([[
            {"label": "CONTRADICTION", "score": 0.88},
            {"label": "NEUTRAL", "score": 0.08},
            {"label": "ENTAILMENT", "score": 0.04}
        ]])),
    );
    let engine = engine_over(backend);

    let verdict = engine.judge(CLAIM, Some(EVIDENCE)).await.unwrap();
    assert_eq!(verdict.kind, VerdictKind::Misinformation);
}

#[tokio::test]
async fn test_neutral_is_uncertain_with_confidence() {
    let backend = Arc::new(MockClassifierBackend::new());
    backend.set_default(ZERO_SHOT_MODEL, MockReply::label("NEUTRAL", 0.61));
    let engine = engine_over(backend);

    let verdict = engine.judge(CLAIM, Some(EVIDENCE)).await.unwrap();
    assert_eq!(verdict.kind, VerdictKind::Uncertain);
    assert!((verdict.confidence - 0.61).abs() < 1e-6);
}

#[tokio::test]
async fn test_gateway_failure_propagates() {
    let backend = Arc::new(MockClassifierBackend::new());
    backend.set_default(ZERO_SHOT_MODEL, MockReply::status(500));
    let engine = engine_over(backend);

    assert!(engine.judge(CLAIM, Some(EVIDENCE)).await.is_err());
}

#[tokio::test]
async fn test_blank_evidence_counts_as_absent() {
    let backend = Arc::new(MockClassifierBackend::new());
    let engine = engine_over(backend.clone());

    let verdict = engine.judge(CLAIM, Some("  ")).await.unwrap();

    assert_eq!(verdict, Verdict::no_evidence());
    assert_eq!(backend.call_count(), 0);
}
