//! Environment variable overrides
//!
//! Empty variables count as unset.

use super::Settings;
use crate::utils::error::{MoveError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_CONFIG_BASE: &str = "GITHUB_CONFIG_BASE";
pub const ENV_API_URL: &str = "API_URL";
pub const ENV_ALLOWED_ROLE_IDS: &str = "ALLOWED_ROLE_IDS";
pub const ENV_NOTIFY_WEBHOOK_URL: &str = "NOTIFY_WEBHOOK_URL";
pub const ENV_HOST: &str = "MOVE_RUNNER_HOST";
pub const ENV_PORT: &str = "MOVE_RUNNER_PORT";
pub const ENV_CONTROL_TOKEN: &str = "MOVE_RUNNER_CONTROL_TOKEN";
pub const ENV_HTTP_TIMEOUT: &str = "MOVE_RUNNER_HTTP_TIMEOUT";
pub const ENV_HISTORY_CAPACITY: &str = "MOVE_RUNNER_HISTORY_CAPACITY";
pub const ENV_LOG_LEVEL: &str = "MOVE_RUNNER_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "MOVE_RUNNER_LOG_JSON";

impl Settings {
    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.engine.api_key = Some(key);
        }
        if let Some(base) = get(ENV_CONFIG_BASE) {
            self.engine.config_base = Some(base);
        }
        if let Some(url) = get(ENV_API_URL) {
            self.engine.default_api_url = Some(url);
        }
        if let Some(roles) = get(ENV_ALLOWED_ROLE_IDS) {
            self.access.allowed_role_ids = crate::services::access::parse_allow_list(&roles);
        }
        if let Some(url) = get(ENV_NOTIFY_WEBHOOK_URL) {
            self.notify.webhook_url = Some(url);
        }
        if let Some(host) = get(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            self.server.port = parse_var(ENV_PORT, &port)?;
        }
        if let Some(token) = get(ENV_CONTROL_TOKEN) {
            self.server.control_token = Some(token);
        }
        if let Some(timeout) = get(ENV_HTTP_TIMEOUT) {
            self.http.timeout_seconds = parse_var(ENV_HTTP_TIMEOUT, &timeout)?;
        }
        if let Some(capacity) = get(ENV_HISTORY_CAPACITY) {
            self.history.capacity = parse_var(ENV_HISTORY_CAPACITY, &capacity)?;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(json) = get(ENV_LOG_JSON) {
            self.logging.json = parse_bool(ENV_LOG_JSON, &json)?;
        }

        debug!("Environment overrides applied");
        Ok(self)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| MoveError::configuration(format!("Invalid {}: {}", key, e)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(MoveError::configuration(format!(
            "Invalid {}: expected a boolean, got '{}'",
            key, other
        ))),
    }
}
