//! Score fusion: bounded 0-100 scores from bias signal and verdict counts.
//!
//! Bias and misinformation scores are computed independently; the reliability score
//! is derived from the misinformation score alone.

pub mod fusion;
pub mod types;

#[cfg(test)]
mod tests;

pub use fusion::{bias_score, final_reliability_score, misinformation_score};
pub use types::{BiasSignalCounts, VerdictCounts};
