//! Misinformation detection: claims, evidence, verdicts, and the resulting scores.

pub mod detector;
pub mod types;


pub use detector::MisinformationDetector;
pub use types::{ClaimFinding, MisinformationReport};
