use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::error::EvidenceError;

/// External reference-lookup capability.
///
/// `Ok(None)` means the source answered and has nothing for the query.
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Option<String>, EvidenceError>;
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
}

/// Wikipedia REST page-summary lookup (`GET {base}/{Title_With_Underscores}`).
#[derive(Clone)]
pub struct WikipediaSource {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for WikipediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikipediaSource")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl WikipediaSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EvidenceError> {
        let base_url = Url::parse(base_url).map_err(|e| EvidenceError::InvalidUrl {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(EvidenceError::InvalidUrl {
                value: base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("verity/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EvidenceError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// Page-summary URL for a query; the title is a single percent-encoded segment.
    pub fn summary_url(&self, query: &str) -> Result<Url, EvidenceError> {
        let title = query.trim().replace(' ', "_");
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| EvidenceError::InvalidUrl {
                value: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(&title);
        Ok(url)
    }
}

#[async_trait]
impl EvidenceSource for WikipediaSource {
    async fn lookup(&self, query: &str) -> Result<Option<String>, EvidenceError> {
        let url = self.summary_url(query)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EvidenceError::Transport {
                query: query.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(query, status = status.as_u16(), "No evidence page");
            return Ok(None);
        }

        let summary: PageSummary = response.json().await.map_err(|e| EvidenceError::Decode {
            query: query.to_string(),
            message: e.to_string(),
        })?;

        Ok(summary.extract.filter(|text| !text.trim().is_empty()))
    }
}
