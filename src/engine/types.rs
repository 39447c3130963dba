use serde::{Deserialize, Serialize};

use crate::bias::BiasReport;
use crate::misinfo::{ClaimFinding, MisinformationReport};

/// Full result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub transcript: String,
    pub ocr_text: String,
    pub clean_text: String,
    pub bias_report: BiasReport,
    pub misinformation: Vec<ClaimFinding>,
    pub misinformation_score: u8,
    pub final_reliability_score: u8,
}

impl AnalysisReport {
    pub fn new(
        transcript: String,
        ocr_text: String,
        clean_text: String,
        bias_report: BiasReport,
        misinformation: MisinformationReport,
    ) -> Self {
        Self {
            transcript,
            ocr_text,
            clean_text,
            bias_report,
            misinformation: misinformation.misinformation,
            misinformation_score: misinformation.misinformation_score,
            final_reliability_score: misinformation.final_reliability_score,
        }
    }

    /// Splits the misinformation half back out.
    pub fn misinformation_report(&self) -> MisinformationReport {
        MisinformationReport {
            misinformation: self.misinformation.clone(),
            misinformation_score: self.misinformation_score,
            final_reliability_score: self.final_reliability_score,
        }
    }
}
