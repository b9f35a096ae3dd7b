//! Notification channel implementations

use crate::utils::error::{MoveError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::error;

/// Payload sent after a run failed before executing any step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorNotification {
    pub name: String,
    pub user_tag: String,
    pub error: String,
    pub duration_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl ErrorNotification {
    /// Human readable one-liner, used as the chat `content` field
    pub fn headline(&self) -> String {
        format!(
            "Run **{}** by {} failed after {} ms: {}",
            self.name, self.user_tag, self.duration_ms, self.error
        )
    }
}

/// Notification channel trait
#[async_trait::async_trait]
pub trait NotificationChannel: Send + Sync + std::fmt::Debug {
    /// Send a notification
    async fn send(&self, notification: &ErrorNotification) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;
}

/// Posts notifications to a chat-compatible webhook
#[derive(Debug)]
pub struct WebhookChannel {
    webhook_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl WebhookChannel {
    pub fn new(webhook_url: String, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            webhook_url,
            client,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl NotificationChannel for WebhookChannel {
    async fn send(&self, notification: &ErrorNotification) -> Result<()> {
        let payload = serde_json::json!({
            "content": notification.headline(),
            "notification": notification,
        });

        let response = self
            .client
            .post(&self.webhook_url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                MoveError::Notification(format!(
                    "Failed to send notification: {}",
                    e.without_url()
                ))
            })?;

        if !response.status().is_success() {
            return Err(MoveError::Notification(format!(
                "Webhook returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

/// Writes notifications to the log only
#[derive(Debug, Default)]
pub struct LogChannel;

#[async_trait::async_trait]
impl NotificationChannel for LogChannel {
    async fn send(&self, notification: &ErrorNotification) -> Result<()> {
        error!(
            name = %notification.name,
            user = %notification.user_tag,
            duration_ms = notification.duration_ms,
            error = %notification.error,
            "Run failed"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
