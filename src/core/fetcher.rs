//! Remote config store access

use crate::utils::error::{MoveError, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Source of named configuration documents
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Retrieve and parse `<base>/<name>.json`, exactly one attempt
    async fn fetch(&self, base: &str, name: &str) -> Result<Value>;
}

/// URL of a named document; `base` must already be free of trailing slashes
pub fn config_url(base: &str, name: &str) -> String {
    format!("{}/{}.json", base, name)
}

/// Config store reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    client: reqwest::Client,
}

impl HttpConfigSource {
    /// The client carries the identifying user agent and request timeout
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    async fn fetch(&self, base: &str, name: &str) -> Result<Value> {
        let url = config_url(base, name);
        info!(url = %url, "Resolved config URL");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MoveError::config_unreachable(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MoveError::config_status(&url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MoveError::config_unreachable(&url, e.to_string()))?;

        let document: Value =
            serde_json::from_str(&body).map_err(|e| MoveError::ConfigParse(e.to_string()))?;

        debug!(name, bytes = body.len(), "Config document parsed");
        Ok(document)
    }
}
