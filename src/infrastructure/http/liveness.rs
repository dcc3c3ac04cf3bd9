//! Liveness probe for destination URLs.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::gateways::UrlLiveness;

/// Probes a URL with a GET request, following redirects.
pub struct HttpUrlLiveness {
    client: Client,
    timeout: Duration,
}

impl HttpUrlLiveness {
    /// Creates a new probe with the given per-request timeout.
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl UrlLiveness for HttpUrlLiveness {
    async fn check(&self, url: &str) -> bool {
        match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let live = (200..400).contains(&status);
                if !live {
                    tracing::debug!(%url, status, "URL probe returned non-success status");
                }
                live
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "URL probe failed");
                false
            }
        }
    }
}
