use async_trait::async_trait;
use reqwest::Client;

use super::{classify_failure, parse_steps, TraceRequest, Tracer, TracerError};
use crate::trace::Step;

/// HTTP client for the tracer service.
#[derive(Debug, Clone)]
pub struct HttpTracer {
    base_url: String,
    client: Client,
}

impl HttpTracer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Tracer for HttpTracer {
    async fn trace(&self, code: &str) -> Result<Vec<Step>, TracerError> {
        let url = format!("{}/visualize", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&TraceRequest { code })
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, url = %url, "trace request failed to send");
                TracerError::Unavailable
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to read tracer response body");
            TracerError::Unavailable
        })?;

        if status.is_success() {
            parse_steps(&body)
        } else {
            tracing::debug!(status = %status, "tracer reported a failed run");
            Err(classify_failure(&body))
        }
    }
}
