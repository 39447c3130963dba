use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use super::backend::{BackendResponse, ClassifierBackend};
use super::error::ClassifyError;
use crate::constants::{
    EMOTION_MODEL, SENTIMENT_MODEL, SUBJECTIVITY_MODEL, TOXICITY_MODEL, ZERO_SHOT_MODEL,
};

/// Scripted reply of a [`MockClassifierBackend`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(BackendResponse),
    Transport(String),
}

impl MockReply {
    /// `200` with the given JSON body.
    pub fn ok(body: serde_json::Value) -> Self {
        MockReply::Respond(BackendResponse::new(200, body.to_string()))
    }

    /// `200` with `[{"label": .., "score": ..}]`.
    pub fn label(label: &str, score: f32) -> Self {
        Self::ok(json!([{ "label": label, "score": score }]))
    }

    /// `200` with a zero-shot `{"labels": [..], "scores": [..]}` body.
    pub fn ranked(labels: &[&str], scores: &[f32]) -> Self {
        Self::ok(json!({ "labels": labels, "scores": scores }))
    }

    /// Non-success status with an error body.
    pub fn status(status: u16) -> Self {
        MockReply::Respond(BackendResponse::new(
            status,
            json!({ "error": format!("mock status {status}") }).to_string(),
        ))
    }

    pub fn transport(message: &str) -> Self {
        MockReply::Transport(message.to_string())
    }
}

/// One call observed by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub payload: serde_json::Value,
}

/// In-memory [`ClassifierBackend`] for tests.
///
/// Resolution order per call: queued replies for the model, then the first rule whose
/// needle occurs in the serialized payload, then the model default. Unscripted calls get
/// a `404`. Payloads matching a delay needle are answered only after that delay.
#[derive(Default)]
pub struct MockClassifierBackend {
    queued: Mutex<HashMap<String, VecDeque<MockReply>>>,
    rules: Mutex<Vec<(String, String, MockReply)>>,
    defaults: Mutex<HashMap<String, MockReply>>,
    delays: Mutex<Vec<(String, Duration)>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockClassifierBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose defaults raise no bias signal.
    ///
    /// NLI calls fall through to the zero-shot default, whose top label `neutral` judges
    /// claims uncertain.
    pub fn calm() -> Self {
        let backend = Self::new();
        backend.set_default(SENTIMENT_MODEL, MockReply::label("POSITIVE", 0.60));
        backend.set_default(EMOTION_MODEL, MockReply::label("joy", 0.90));
        backend.set_default(TOXICITY_MODEL, MockReply::label("toxic", 0.05));
        backend.set_default(
            ZERO_SHOT_MODEL,
            MockReply::ranked(
                &["neutral", "left-leaning", "right-leaning"],
                &[0.90, 0.05, 0.05],
            ),
        );
        backend.set_default(SUBJECTIVITY_MODEL, MockReply::label("OBJECTIVE", 0.90));
        backend
    }

    /// Reply used for `model` when nothing more specific matches.
    pub fn set_default(&self, model: &str, reply: MockReply) {
        self.defaults.lock().insert(model.to_string(), reply);
    }

    /// Reply used for `model` whenever the payload contains `needle`.
    pub fn add_rule(&self, model: &str, needle: &str, reply: MockReply) {
        self.rules
            .lock()
            .push((model.to_string(), needle.to_string(), reply));
    }

    /// Holds back every reply, for any model, whose payload contains `needle`.
    pub fn delay_when(&self, needle: &str, delay: Duration) {
        self.delays.lock().push((needle.to_string(), delay));
    }

    /// One-shot reply, consumed in FIFO order before rules and defaults.
    pub fn enqueue(&self, model: &str, reply: MockReply) {
        self.queued
            .lock()
            .entry(model.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls_for(&self, model: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.model == model).count()
    }

    fn resolve(&self, model: &str, payload: &serde_json::Value) -> Option<MockReply> {
        if let Some(reply) = self
            .queued
            .lock()
            .get_mut(model)
            .and_then(VecDeque::pop_front)
        {
            return Some(reply);
        }

        let serialized = payload.to_string();
        if let Some((_, _, reply)) = self
            .rules
            .lock()
            .iter()
            .find(|(m, needle, _)| m == model && serialized.contains(needle.as_str()))
        {
            return Some(reply.clone());
        }

        self.defaults.lock().get(model).cloned()
    }

    fn delay_for(&self, payload: &serde_json::Value) -> Option<Duration> {
        let serialized = payload.to_string();
        self.delays
            .lock()
            .iter()
            .filter(|(needle, _)| serialized.contains(needle.as_str()))
            .map(|(_, delay)| *delay)
            .max()
    }
}

impl std::fmt::Debug for MockClassifierBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockClassifierBackend")
            .field("calls", &self.call_count())
            .finish()
    }
}

#[async_trait]
impl ClassifierBackend for MockClassifierBackend {
    async fn infer(
        &self,
        model_id: &str,
        payload: &serde_json::Value,
    ) -> Result<BackendResponse, ClassifyError> {
        self.calls.lock().push(RecordedCall {
            model: model_id.to_string(),
            payload: payload.clone(),
        });

        if let Some(delay) = self.delay_for(payload) {
            tokio::time::sleep(delay).await;
        }

        match self.resolve(model_id, payload) {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Transport(message)) => Err(ClassifyError::Transport {
                model: model_id.to_string(),
                message,
            }),
            None => Ok(BackendResponse::new(
                404,
                json!({ "error": format!("no mock reply for {model_id}") }).to_string(),
            )),
        }
    }
}
