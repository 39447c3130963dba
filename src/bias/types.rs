use serde::{Deserialize, Serialize};

/// Rhetorical bias summary of a sentence batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasReport {
    /// Most frequent recorded sentiment label, or `"neutral"`.
    pub emotional_tone: String,
    /// `true` if any sentence raised a manipulative flag.
    pub manipulative_language: bool,
    /// Most frequent recorded political label, or `"neutral"`.
    pub political_bias: String,
    /// First subjective sentences, in input order.
    pub opinion_disguised_as_fact: Vec<String>,
    /// 0-100.
    pub bias_score: u8,
}

impl BiasReport {
    pub const NEUTRAL: &'static str = "neutral";

    /// Report for a batch without any signal.
    pub fn neutral() -> Self {
        Self {
            emotional_tone: Self::NEUTRAL.to_string(),
            manipulative_language: false,
            political_bias: Self::NEUTRAL.to_string(),
            opinion_disguised_as_fact: Vec::new(),
            bias_score: 0,
        }
    }
}

impl Default for BiasReport {
    fn default() -> Self {
        Self::neutral()
    }
}
