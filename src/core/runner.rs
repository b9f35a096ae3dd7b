//! Batch runner, the engine entry point

use super::executor::{MoveExecutor, classify_response};
use super::fetcher::ConfigSource;
use super::types::{BatchResult, BatchTally, ExecutionParams, MoveConfig, MoveOperation};
use crate::config::EngineConfig;
use crate::utils::error::{MoveError, Result, StepError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs named move configs against the operation API
///
/// Holds no per-run state, so one runner can serve overlapping invocations.
#[derive(Clone)]
pub struct BatchRunner {
    engine: EngineConfig,
    source: Arc<dyn ConfigSource>,
    executor: Arc<dyn MoveExecutor>,
}

impl BatchRunner {
    pub fn new(
        engine: EngineConfig,
        source: Arc<dyn ConfigSource>,
        executor: Arc<dyn MoveExecutor>,
    ) -> Self {
        Self {
            engine,
            source,
            executor,
        }
    }

    /// Build a runner that talks HTTP to both remotes through one client
    pub fn with_http(engine: EngineConfig, client: reqwest::Client) -> Self {
        Self::new(
            engine,
            Arc::new(super::fetcher::HttpConfigSource::new(client.clone())),
            Arc::new(super::executor::HttpMoveExecutor::new(client)),
        )
    }

    /// Run the named config
    ///
    /// Only missing settings or a config that cannot be retrieved or parsed
    /// fail the call. Step failures are recorded in the result and never stop
    /// the remaining steps.
    pub async fn run(&self, name: &str) -> Result<BatchResult> {
        if name.trim().is_empty() {
            return Err(MoveError::invalid_request("config name must not be empty"));
        }

        let engine = self.engine.resolve()?;
        let document = self.source.fetch(&engine.config_base, name).await?;
        let config = MoveConfig::from_value(document);

        let params = ExecutionParams {
            api_key: engine.api_key,
            api_url: config.api_url.unwrap_or(engine.default_api_url),
            load_chunks: config.load_chunks,
        };

        if config.moves.is_empty() {
            info!(name, "Config has no moves");
            return Ok(BatchResult::empty());
        }

        info!(
            name,
            moves = config.moves.len(),
            api_url = %params.api_url,
            load_chunks = params.load_chunks,
            "Starting batch"
        );

        let mut tally = BatchTally::new(config.moves.len());
        for (index, raw) in config.moves.iter().enumerate() {
            match self.run_step(&params, raw).await {
                Ok(()) => {
                    debug!(name, step = index + 1, "Step succeeded");
                    tally.record_success();
                }
                Err(reason) => {
                    warn!(name, step = index + 1, reason = %reason, "Step failed");
                    tally.record_failure(index, &reason);
                }
            }
        }

        let result = tally.finish();
        info!(
            name,
            total = result.total,
            ok_count = result.ok_count,
            fail_count = result.fail_count,
            "Batch finished"
        );
        Ok(result)
    }

    async fn run_step(
        &self,
        params: &ExecutionParams,
        raw: &serde_json::Value,
    ) -> std::result::Result<(), StepError> {
        let op = MoveOperation::from_value(raw)?;
        let body = self.executor.execute(params, &op).await?;
        classify_response(&body)
    }
}
