//! Bias signal aggregation over a sentence batch.
//!
//! Each sentence goes through a keyword prefilter, then five classifiers (sentiment,
//! emotion, toxicity, zero-shot political leaning, subjectivity). Thresholded signals
//! are folded into a [`BiasReport`].

pub mod aggregator;
pub mod prefilter;
pub mod signals;
pub mod types;


pub use aggregator::{BiasAggregator, stable_mode};
pub use prefilter::passes_prefilter;
pub use signals::{SentenceClassifications, SentenceSignals, SignalClassifier};
pub use types::BiasReport;
