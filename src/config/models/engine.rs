//! Engine configuration

use super::FALLBACK_API_URL;
use crate::utils::error::{MoveError, Result};
use serde::{Deserialize, Serialize};

/// Process-wide settings consumed by the batch engine
///
/// Every field is optional here. Missing required values are reported when a
/// batch is started, not when the settings are loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Secret key for the operation API
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base location of the config store
    #[serde(default)]
    pub config_base: Option<String>,
    /// Operation API endpoint used when a document does not name one
    #[serde(default)]
    pub default_api_url: Option<String>,
}

/// Engine settings after the required values were checked
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedEngine {
    pub api_key: String,
    /// Config store base without trailing slashes
    pub config_base: String,
    pub default_api_url: String,
}

impl std::fmt::Debug for ResolvedEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedEngine")
            .field("api_key", &"***")
            .field("config_base", &self.config_base)
            .field("default_api_url", &self.default_api_url)
            .finish()
    }
}

impl EngineConfig {
    /// Check the required values and apply the endpoint fallback
    pub fn resolve(&self) -> Result<ResolvedEngine> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| MoveError::configuration("API_KEY is missing"))?;

        let config_base = self
            .config_base
            .as_deref()
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .ok_or_else(|| MoveError::configuration("GITHUB_CONFIG_BASE is missing or empty"))?;

        let default_api_url = self
            .default_api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(FALLBACK_API_URL);

        Ok(ResolvedEngine {
            api_key: api_key.to_string(),
            config_base: config_base.to_string(),
            default_api_url: default_api_url.to_string(),
        })
    }
}
