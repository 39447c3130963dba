use serde::{Deserialize, Serialize};

use crate::constants::{EVIDENCE_SNIPPET_CHARS, MAX_SCORE};
use crate::verdict::{Verdict, VerdictKind};

/// One judged claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimFinding {
    pub claim: String,
    pub verdict: VerdictKind,
    /// Rounded to two decimals.
    pub confidence: f32,
    /// Leading characters of the evidence, or `null` when none was found.
    pub evidence_snippet: Option<String>,
}

impl ClaimFinding {
    pub fn new(claim: impl Into<String>, verdict: Verdict, evidence: Option<&str>) -> Self {
        Self {
            claim: claim.into(),
            verdict: verdict.kind,
            confidence: round_confidence(verdict.confidence),
            evidence_snippet: evidence.map(snippet),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MisinformationReport {
    /// Findings in claim order, truncated after scoring.
    pub misinformation: Vec<ClaimFinding>,
    pub misinformation_score: u8,
    pub final_reliability_score: u8,
}

impl MisinformationReport {
    /// Report for a batch without claims.
    pub fn empty() -> Self {
        Self {
            misinformation: Vec::new(),
            misinformation_score: 0,
            final_reliability_score: MAX_SCORE,
        }
    }
}

impl Default for MisinformationReport {
    fn default() -> Self {
        Self::empty()
    }
}

pub(crate) fn round_confidence(confidence: f32) -> f32 {
    (confidence * 100.0).round() / 100.0
}

pub(crate) fn snippet(evidence: &str) -> String {
    evidence.chars().take(EVIDENCE_SNIPPET_CHARS).collect()
}
