//! Run command orchestration
//!
//! Front ends (the HTTP control surface, the CLI) call [`MoveService::run`]
//! and only render what comes back.

use super::access::is_allowed;
use super::history::{RunHistory, RunRecord};
use super::notify::{ErrorNotification, LogChannel, NotificationChannel, WebhookChannel};
use super::render::{render_denied, render_outcome, render_started};
use crate::config::Settings;
use crate::core::{BatchResult, BatchRunner};
use crate::utils::error::{MoveError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// A request to run one named config
#[derive(Debug, Clone, Default)]
pub struct RunCommand {
    pub name: String,
    /// Display tag of the operator, recorded in history and notifications
    pub user_tag: String,
    /// Role identifiers the operator holds
    pub roles: HashSet<String>,
}

/// Outcome of a run that settled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub name: String,
    pub duration_ms: u64,
    pub result: BatchResult,
    /// Rendered operator message
    pub message: String,
}

/// Runs configs on behalf of operators and keeps the run history
#[derive(Clone)]
pub struct MoveService {
    runner: BatchRunner,
    history: Arc<RunHistory>,
    notifier: Arc<dyn NotificationChannel>,
    allow_list: Vec<String>,
}

impl MoveService {
    pub fn new(
        runner: BatchRunner,
        history: Arc<RunHistory>,
        notifier: Arc<dyn NotificationChannel>,
        allow_list: Vec<String>,
    ) -> Self {
        Self {
            runner,
            history,
            notifier,
            allow_list,
        }
    }

    /// Wire the HTTP runner, history and notification channel from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = settings.http.build_client()?;
        let runner = BatchRunner::with_http(settings.engine.clone(), client.clone());

        let notifier: Arc<dyn NotificationChannel> = match &settings.notify.webhook_url {
            Some(url) => Arc::new(WebhookChannel::new(
                url.clone(),
                client,
                Duration::from_secs(settings.notify.timeout_seconds),
            )),
            None => Arc::new(LogChannel),
        };
        info!(channel = notifier.name(), "Failure notifications configured");

        Ok(Self::new(
            runner,
            Arc::new(RunHistory::new(settings.history.capacity)),
            notifier,
            settings.access.allowed_role_ids.clone(),
        ))
    }

    /// Run a config for an operator
    ///
    /// Engine errors are returned unchanged after they were recorded and the
    /// notification channel was told.
    pub async fn run(&self, command: RunCommand) -> Result<RunReport> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(MoveError::invalid_request("config name must not be empty"));
        }

        if !is_allowed(&command.roles, &self.allow_list) {
            warn!(name, user = %command.user_tag, "Run denied");
            return Err(MoveError::forbidden(render_denied()));
        }

        info!(user = %command.user_tag, "{}", render_started(name));
        let started = Instant::now();

        match self.runner.run(name).await {
            Ok(result) => {
                let duration_ms = elapsed_ms(started);
                self.history.record(RunRecord {
                    timestamp: chrono::Utc::now(),
                    name: name.to_string(),
                    ok: result.ok && !result.is_empty(),
                    duration_ms,
                    user_tag: command.user_tag.clone(),
                    summary: result.summary(),
                });

                Ok(RunReport {
                    name: name.to_string(),
                    duration_ms,
                    message: render_outcome(name, &result),
                    result,
                })
            }
            Err(err) => {
                let duration_ms = elapsed_ms(started);
                warn!(
                    name,
                    user = %command.user_tag,
                    fatal = err.is_fatal_run_error(),
                    error = %err,
                    "Run aborted"
                );
                self.history.record(RunRecord {
                    timestamp: chrono::Utc::now(),
                    name: name.to_string(),
                    ok: false,
                    duration_ms,
                    user_tag: command.user_tag.clone(),
                    summary: err.to_string(),
                });

                let notification = ErrorNotification {
                    name: name.to_string(),
                    user_tag: command.user_tag,
                    error: err.to_string(),
                    duration_ms,
                    timestamp: chrono::Utc::now(),
                };
                if let Err(notify_err) = self.notifier.send(&notification).await {
                    warn!(
                        channel = self.notifier.name(),
                        error = %notify_err,
                        "Failed to deliver failure notification"
                    );
                }

                Err(err)
            }
        }
    }

    /// Most recent runs, newest first
    pub fn status(&self, limit: usize) -> Vec<RunRecord> {
        self.history.recent(limit)
    }

    pub fn history(&self) -> &Arc<RunHistory> {
        &self.history
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
