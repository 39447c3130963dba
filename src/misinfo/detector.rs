use futures_util::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use super::types::{ClaimFinding, MisinformationReport};
use crate::claims::extract_claims;
use crate::constants::{DEFAULT_MAX_CONCURRENCY, MAX_MISINFO_RECORDS};
use crate::evidence::EvidenceFetcher;
use crate::scoring::{VerdictCounts, final_reliability_score};
use crate::verdict::VerdictEngine;

/// Extracts claims, fetches evidence, judges each claim, and scores the batch.
#[derive(Debug, Clone)]
pub struct MisinformationDetector {
    fetcher: EvidenceFetcher,
    verdicts: VerdictEngine,
    max_concurrency: usize,
}

impl MisinformationDetector {
    pub fn new(fetcher: EvidenceFetcher, verdicts: VerdictEngine) -> Self {
        Self::with_concurrency(fetcher, verdicts, DEFAULT_MAX_CONCURRENCY)
    }

    /// `max_concurrency` bounds how many claims are in flight at once.
    pub fn with_concurrency(
        fetcher: EvidenceFetcher,
        verdicts: VerdictEngine,
        max_concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            verdicts,
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub fn fetcher(&self) -> &EvidenceFetcher {
        &self.fetcher
    }

    /// Builds the [`MisinformationReport`] for `sentences`.
    ///
    /// Claims without evidence are reported as uncertain. Claims whose classification
    /// fails are logged and left out of both the findings and the score.
    #[instrument(skip_all, fields(sentences = sentences.len(), clean_len = clean_text.len()))]
    pub async fn detect_misinformation(
        &self,
        clean_text: &str,
        sentences: &[String],
    ) -> MisinformationReport {
        let claims = extract_claims(sentences);
        if claims.is_empty() {
            debug!("No claim candidates");
            return MisinformationReport::empty();
        }

        let fetcher = self.fetcher.clone();
        let verdicts = self.verdicts.clone();
        let outcomes: Vec<_> = stream::iter(claims)
            .map(move |claim| {
                let fetcher = fetcher.clone();
                let verdicts = verdicts.clone();
                async move {
                    let evidence = fetcher.fetch_for_claim(&claim).await;
                    let verdict = verdicts.judge(&claim, evidence.as_deref()).await;
                    (claim, evidence, verdict)
                }
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let mut findings = Vec::with_capacity(outcomes.len());
        for (claim, evidence, verdict) in outcomes {
            match verdict {
                Ok(verdict) => {
                    findings.push(ClaimFinding::new(claim, verdict, evidence.as_deref()));
                }
                Err(e) => warn!(claim = %claim, error = %e, "Claim skipped"),
            }
        }

        let counts = VerdictCounts::tally(findings.iter().map(|f| &f.verdict));
        let misinformation_score = counts.misinformation_score();
        findings.truncate(MAX_MISINFO_RECORDS);

        debug!(
            judged = counts.total(),
            misinformation = counts.misinformation,
            uncertain = counts.uncertain,
            misinformation_score,
            "Claims judged"
        );

        MisinformationReport {
            misinformation: findings,
            misinformation_score,
            final_reliability_score: final_reliability_score(misinformation_score),
        }
    }
}
