use std::time::Duration;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use crate::config::{redact_credential, UpstreamConfig};
use crate::errors::{DashboardError, FetchError};
use super::{FetchResult, UpstreamApi};

/// HTTP client for the backup-management API.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    token: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DashboardError::HttpClient(e.to_string()))?;

        if config.token.as_deref().unwrap_or_default().is_empty() {
            warn!("No upstream API token configured, requests will likely be rejected");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().unwrap_or_default(),
        })
    }
}

#[async_trait]
impl UpstreamApi for UpstreamClient {
    async fn fetch(&self, path: &str) -> FetchResult {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Upstream GET");

        let resp = self.client
            .get(&url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                let msg = redact_credential(&e.to_string(), &self.token);
                warn!(url = %url, error = %msg, "Upstream request failed");
                FetchError::Transport(msg)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = status.as_u16(), "Upstream returned non-success status");
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<Value>().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to decode upstream response");
            FetchError::Transport(format!("invalid JSON body: {}", e))
        })
    }
}

