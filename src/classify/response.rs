use serde::{Deserialize, Serialize};

use super::error::ClassifyError;

/// Normalized `(label, confidence)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Case-insensitive label comparison.
    pub fn label_is(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label)
    }

    /// Case-insensitive substring match on the label.
    pub fn label_contains(&self, needle: &str) -> bool {
        self.label
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
    }
}

/// The response shapes classification endpoints are known to return.
///
/// Variant order matters: untagged deserialization tries them top to bottom.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClassifierResponse {
    /// `{"label": .., "score": ..}`
    Single(Classification),
    /// `{"labels": [..], "scores": [..]}` (zero-shot), already ranked.
    Ranked { labels: Vec<String>, scores: Vec<f32> },
    /// `[{"label": .., "score": ..}, ..]`
    Flat(Vec<Classification>),
    /// `[[{"label": .., "score": ..}, ..]]`
    Nested(Vec<Vec<Classification>>),
}

impl ClassifierResponse {
    /// Parses a response body, failing on any shape not listed above.
    pub fn parse(model: &str, body: &str) -> Result<Self, ClassifyError> {
        serde_json::from_str(body).map_err(|e| ClassifyError::MalformedResponse {
            model: model.to_string(),
            reason: format!("unrecognized shape: {e}"),
        })
    }

    /// Reduces the response to its best classification.
    ///
    /// Lists pick the highest score (first wins on ties); ranked responses take rank 0.
    pub fn top(self, model: &str) -> Result<Classification, ClassifyError> {
        let malformed = |reason: &str| ClassifyError::MalformedResponse {
            model: model.to_string(),
            reason: reason.to_string(),
        };

        match self {
            ClassifierResponse::Single(classification) => Ok(classification),
            ClassifierResponse::Ranked { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(malformed("labels and scores differ in length"));
                }
                match (labels.into_iter().next(), scores.first()) {
                    (Some(label), Some(&score)) => Ok(Classification { label, score }),
                    _ => Err(malformed("empty ranking")),
                }
            }
            ClassifierResponse::Flat(list) => {
                highest(list).ok_or_else(|| malformed("empty label list"))
            }
            ClassifierResponse::Nested(groups) => highest(groups.into_iter().flatten())
                .ok_or_else(|| malformed("empty nested label list")),
        }
    }
}

fn highest(items: impl IntoIterator<Item = Classification>) -> Option<Classification> {
    items.into_iter().fold(None, |best, item| match best {
        Some(current) if current.score >= item.score => Some(current),
        _ => Some(item),
    })
}
