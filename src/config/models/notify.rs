//! Notification and access configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Error notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Webhook receiving failure notifications; failures are only logged when unset
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Timeout for a single notification request in seconds
    #[serde(default = "default_notify_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_seconds: default_notify_timeout(),
        }
    }
}

/// Who may start a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Role identifiers allowed to run configs; empty allows everyone
    #[serde(default)]
    pub allowed_role_ids: Vec<String>,
}
