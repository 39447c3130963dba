use super::types::{BiasSignalCounts, VerdictCounts};
use crate::constants::{
    EMOTIONAL_WEIGHT, MANIPULATIVE_WEIGHT, MAX_SCORE, MISINFO_PENALTY, OPINION_WEIGHT,
    POLITICAL_WEIGHT, UNCERTAIN_PENALTY,
};

#[inline]
fn clamp_score(raw: u32) -> u8 {
    raw.min(u32::from(MAX_SCORE)) as u8
}

/// `min(100, 5·emotional + 10·manipulative + 10·political + 5·opinion)`.
pub fn bias_score(counts: &BiasSignalCounts) -> u8 {
    let raw = counts
        .emotional
        .saturating_mul(EMOTIONAL_WEIGHT)
        .saturating_add(counts.manipulative.saturating_mul(MANIPULATIVE_WEIGHT))
        .saturating_add(counts.political.saturating_mul(POLITICAL_WEIGHT))
        .saturating_add(counts.opinion.saturating_mul(OPINION_WEIGHT));
    clamp_score(raw)
}

/// `min(100, 20·misinformation + 5·uncertain)`. Supported verdicts add nothing.
pub fn misinformation_score(counts: &VerdictCounts) -> u8 {
    let raw = counts
        .misinformation
        .saturating_mul(MISINFO_PENALTY)
        .saturating_add(counts.uncertain.saturating_mul(UNCERTAIN_PENALTY));
    clamp_score(raw)
}

/// `max(0, 100 - misinformation_score)`.
pub fn final_reliability_score(misinformation_score: u8) -> u8 {
    MAX_SCORE.saturating_sub(misinformation_score)
}
