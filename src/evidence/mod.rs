//! Evidence lookup for claims, memoized in a bounded LRU cache.

pub mod error;
pub mod fetcher;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod source;


pub use error::EvidenceError;
pub use fetcher::EvidenceFetcher;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEvidenceSource;
pub use source::{EvidenceSource, WikipediaSource};
