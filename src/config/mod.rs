//! Configuration management for the runner
//!
//! Settings come from an optional YAML file and are then overridden by
//! environment variables.

pub mod loader;
pub mod models;


pub use models::*;

use crate::utils::error::{MoveError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main settings struct for the runner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading settings from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MoveError::configuration(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .map_err(|e| MoveError::configuration(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;

        debug!("Settings loaded successfully");
        Ok(settings)
    }

    /// Load settings from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading settings from environment variables");

        let settings = Self::default().apply_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from an optional file, with the environment taking precedence
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        let settings = base.apply_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the entire configuration
    ///
    /// The engine's API key and config base are not checked here; a batch
    /// reports them as missing when it starts.
    pub fn validate(&self) -> Result<()> {
        debug!("Validating settings");

        self.server
            .validate()
            .map_err(|e| MoveError::configuration(format!("Server config error: {}", e)))?;

        if self.http.user_agent.trim().is_empty() {
            return Err(MoveError::configuration("HTTP user agent cannot be empty"));
        }

        if self.history.capacity == 0 {
            return Err(MoveError::configuration("History capacity must be greater than 0"));
        }

        if let Some(url) = &self.engine.default_api_url {
            validate_url("engine.default_api_url", url)?;
        }
        if let Some(url) = &self.notify.webhook_url {
            validate_url("notify.webhook_url", url)?;
        }

        Ok(())
    }

    /// Copy of the settings with every secret masked
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.engine.api_key = copy.engine.api_key.as_deref().map(mask_secret);
        copy.server.control_token = copy.server.control_token.as_deref().map(mask_secret);
        copy.notify.webhook_url = copy.notify.webhook_url.as_deref().map(mask_secret);
        copy
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| MoveError::configuration(format!("Invalid {}: {}", field, e)))
}
