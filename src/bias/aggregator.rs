use futures_util::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use super::prefilter::passes_prefilter;
use super::signals::{SentenceSignals, SignalClassifier};
use super::types::BiasReport;
use crate::classify::ClassificationGateway;
use crate::constants::{DEFAULT_MAX_CONCURRENCY, MAX_OPINION_SENTENCES};
use crate::scoring::BiasSignalCounts;

/// Most frequent value; on equal counts the value seen first wins.
pub fn stable_mode<S: AsRef<str>>(values: &[S]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        let value = value.as_ref();
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
        .map(|(value, _)| value)
}

/// Working set accumulated in input order.
#[derive(Debug, Default)]
struct BiasTally {
    emotional: Vec<String>,
    manipulative: u32,
    political: Vec<String>,
    opinions: Vec<String>,
}

impl BiasTally {
    fn absorb(&mut self, sentence: &str, signals: SentenceSignals) {
        self.manipulative += signals.manipulative_flags();
        if let Some(label) = signals.emotional {
            self.emotional.push(label);
        }
        if let Some(label) = signals.political {
            self.political.push(label);
        }
        if signals.opinion {
            self.opinions.push(sentence.to_string());
        }
    }

    fn counts(&self) -> BiasSignalCounts {
        BiasSignalCounts {
            emotional: self.emotional.len() as u32,
            manipulative: self.manipulative,
            political: self.political.len() as u32,
            opinion: self.opinions.len() as u32,
        }
    }

    fn into_report(mut self) -> BiasReport {
        let bias_score = self.counts().bias_score();
        let emotional_tone = stable_mode(&self.emotional)
            .unwrap_or(BiasReport::NEUTRAL)
            .to_string();
        let political_bias = stable_mode(&self.political)
            .unwrap_or(BiasReport::NEUTRAL)
            .to_string();
        self.opinions.truncate(MAX_OPINION_SENTENCES);

        BiasReport {
            emotional_tone,
            manipulative_language: self.manipulative > 0,
            political_bias,
            opinion_disguised_as_fact: self.opinions,
            bias_score,
        }
    }
}

/// Prefilters sentences, classifies survivors, and folds their signals into a report.
#[derive(Debug, Clone)]
pub struct BiasAggregator {
    signals: SignalClassifier,
    max_concurrency: usize,
}

impl BiasAggregator {
    pub fn new(gateway: ClassificationGateway) -> Self {
        Self::with_concurrency(gateway, DEFAULT_MAX_CONCURRENCY)
    }

    /// `max_concurrency` bounds how many sentences are classified at once.
    pub fn with_concurrency(gateway: ClassificationGateway, max_concurrency: usize) -> Self {
        Self {
            signals: SignalClassifier::new(gateway),
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Builds the [`BiasReport`] for `sentences`.
    ///
    /// Sentences whose classification fails are logged and contribute nothing. Results
    /// are folded in input order whatever order the calls complete in.
    #[instrument(skip_all, fields(sentences = sentences.len()))]
    pub async fn analyze_bias(&self, sentences: &[String]) -> BiasReport {
        let candidates: Vec<String> = sentences
            .iter()
            .map(|s| s.trim())
            .filter(|s| passes_prefilter(s))
            .map(str::to_string)
            .collect();

        debug!(candidates = candidates.len(), "Bias prefilter applied");

        let signals = self.signals.clone();
        let outcomes: Vec<_> = stream::iter(candidates)
            .map(move |sentence| {
                let signals = signals.clone();
                async move {
                    let outcome = signals.classify(&sentence).await;
                    (sentence, outcome)
                }
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let mut tally = BiasTally::default();
        for (sentence, outcome) in outcomes {
            match outcome {
                Ok(signals) => tally.absorb(&sentence, signals),
                Err(e) => warn!(
                    model = e.model().unwrap_or("unknown"),
                    error = %e,
                    "Sentence skipped from bias analysis"
                ),
            }
        }

        tally.into_report()
    }
}
