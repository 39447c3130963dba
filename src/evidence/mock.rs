use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::error::EvidenceError;
use super::source::EvidenceSource;

/// In-memory [`EvidenceSource`] that counts lookups.
#[derive(Default)]
pub struct MockEvidenceSource {
    entries: RwLock<HashMap<String, String>>,
    failing: RwLock<HashSet<String>>,
    delay: RwLock<Option<Duration>>,
    lookups: AtomicUsize,
}

impl MockEvidenceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, query: &str, text: &str) -> Self {
        self.insert(query, text);
        self
    }

    pub fn insert(&self, query: &str, text: &str) {
        self.entries
            .write()
            .insert(query.to_string(), text.to_string());
    }

    /// Makes lookups for `query` return a transport error.
    pub fn fail_on(&self, query: &str) {
        self.failing.write().insert(query.to_string());
    }

    /// Delays every lookup, for timeout and coalescing tests.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write() = Some(delay);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for MockEvidenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockEvidenceSource")
            .field("entries", &self.entries.read().len())
            .field("lookups", &self.lookup_count())
            .finish()
    }
}

#[async_trait]
impl EvidenceSource for MockEvidenceSource {
    async fn lookup(&self, query: &str) -> Result<Option<String>, EvidenceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.read().contains(query) {
            return Err(EvidenceError::Transport {
                query: query.to_string(),
                message: "mock failure".to_string(),
            });
        }

        Ok(self.entries.read().get(query).cloned())
    }
}
