//! Verdict engine: judges a claim against its evidence with an NLI classifier.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::classify::{ClassificationGateway, ClassifyError};
use crate::constants::ZERO_SHOT_MODEL;

/// Outcome class of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictKind {
    Supported,
    Misinformation,
    Uncertain,
}

impl VerdictKind {
    /// Maps an NLI label: `ENTAILMENT` supports, `CONTRADICTION` refutes, anything else
    /// is uncertain. Case-insensitive.
    pub fn from_nli_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("entailment") {
            VerdictKind::Supported
        } else if label.eq_ignore_ascii_case("contradiction") {
            VerdictKind::Misinformation
        } else {
            VerdictKind::Uncertain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::Supported => "supported",
            VerdictKind::Misinformation => "misinformation",
            VerdictKind::Uncertain => "uncertain",
        }
    }
}

impl std::fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict with the classifier confidence (0.0 when no evidence was available).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub confidence: f32,
}

impl Verdict {
    /// The verdict for a claim without evidence.
    pub const fn no_evidence() -> Self {
        Self {
            kind: VerdictKind::Uncertain,
            confidence: 0.0,
        }
    }
}

/// NLI request body: evidence as premise, claim as hypothesis.
pub fn nli_payload(claim: &str, evidence: &str) -> serde_json::Value {
    json!({
        "inputs": {
            "premise": evidence,
            "hypothesis": claim,
        }
    })
}

#[derive(Debug, Clone)]
pub struct VerdictEngine {
    gateway: ClassificationGateway,
    model: String,
}

impl VerdictEngine {
    pub fn new(gateway: ClassificationGateway) -> Self {
        Self::with_model(gateway, ZERO_SHOT_MODEL)
    }

    pub fn with_model(gateway: ClassificationGateway, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Judges `claim`. Absent or blank evidence short-circuits to
    /// [`Verdict::no_evidence`] without a classification call.
    pub async fn judge(
        &self,
        claim: &str,
        evidence: Option<&str>,
    ) -> Result<Verdict, ClassifyError> {
        let Some(evidence) = evidence.filter(|e| !e.trim().is_empty()) else {
            return Ok(Verdict::no_evidence());
        };

        let top = self
            .gateway
            .classify(&self.model, &nli_payload(claim, evidence))
            .await?;
        let kind = VerdictKind::from_nli_label(&top.label);

        debug!(label = %top.label, verdict = %kind, confidence = top.score, "Claim judged");

        Ok(Verdict {
            kind,
            confidence: top.score,
        })
    }
}
