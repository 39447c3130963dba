use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::backend::{BackendResponse, ClassifierBackend};
use super::error::ClassifyError;

/// HTTP inference router client (`POST {base_url}/{model_id}` with a bearer token).
#[derive(Clone)]
pub struct HttpClassifier {
    client: Client,
    base_url: String,
    api_token: String,
}

impl std::fmt::Debug for HttpClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClassifier")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpClassifier {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClassifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifyError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for a model id. Model ids contain `/` and are appended verbatim.
    pub fn endpoint(&self, model_id: &str) -> String {
        format!("{}/{}", self.base_url, model_id.trim_start_matches('/'))
    }
}

#[async_trait]
impl ClassifierBackend for HttpClassifier {
    async fn infer(
        &self,
        model_id: &str,
        payload: &serde_json::Value,
    ) -> Result<BackendResponse, ClassifyError> {
        let url = self.endpoint(model_id);
        let transport = |e: reqwest::Error| ClassifyError::Transport {
            model: model_id.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;

        debug!(model = model_id, status, body_len = body.len(), "Inference response");

        Ok(BackendResponse { status, body })
    }
}
