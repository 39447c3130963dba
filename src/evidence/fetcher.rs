use moka::future::Cache;
use moka::policy::EvictionPolicy;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::source::EvidenceSource;
use crate::claims::evidence_query;
use crate::constants::{DEFAULT_EVIDENCE_CACHE_CAPACITY, DEFAULT_EVIDENCE_TIMEOUT_SECS};

/// Process-wide, bounded LRU memo in front of an [`EvidenceSource`].
///
/// Every outcome is cached, including "no evidence" after a failure or timeout, so a
/// query is looked up at most once while it stays resident. Concurrent misses on the
/// same query share one lookup.
#[derive(Clone)]
pub struct EvidenceFetcher {
    source: Arc<dyn EvidenceSource>,
    cache: Cache<String, Option<String>>,
    timeout: Duration,
}

impl std::fmt::Debug for EvidenceFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceFetcher")
            .field("entries", &self.cache.entry_count())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl EvidenceFetcher {
    pub fn new(source: Arc<dyn EvidenceSource>, capacity: u64, timeout: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self {
            source,
            cache,
            timeout,
        }
    }

    /// Fetcher with the default capacity and lookup timeout.
    pub fn with_defaults(source: Arc<dyn EvidenceSource>) -> Self {
        Self::new(
            source,
            DEFAULT_EVIDENCE_CACHE_CAPACITY,
            Duration::from_secs(DEFAULT_EVIDENCE_TIMEOUT_SECS),
        )
    }

    /// Evidence for a claim, looked up by its leading words.
    pub async fn fetch_for_claim(&self, claim: &str) -> Option<String> {
        self.fetch(&evidence_query(claim)).await
    }

    /// Evidence for an exact query string.
    pub async fn fetch(&self, query: &str) -> Option<String> {
        if query.trim().is_empty() {
            return None;
        }

        let key = query.to_string();
        let source = Arc::clone(&self.source);
        let timeout = self.timeout;
        let lookup_key = key.clone();

        self.cache
            .get_with(key, async move {
                match tokio::time::timeout(timeout, source.lookup(&lookup_key)).await {
                    Ok(Ok(found)) => {
                        debug!(query = %lookup_key, found = found.is_some(), "Evidence lookup");
                        found
                    }
                    Ok(Err(e)) => {
                        warn!(query = %lookup_key, error = %e, "Evidence lookup failed");
                        None
                    }
                    Err(_) => {
                        warn!(
                            query = %lookup_key,
                            timeout_ms = timeout.as_millis() as u64,
                            "Evidence lookup timed out"
                        );
                        None
                    }
                }
            })
            .await
    }

    /// Returns `true` if the query has a cached outcome.
    pub fn contains(&self, query: &str) -> bool {
        self.cache.contains_key(query)
    }

    /// Number of cached queries after pending evictions are applied.
    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn capacity(&self) -> Option<u64> {
        self.cache.policy().max_capacity()
    }
}
