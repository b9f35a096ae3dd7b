//! # move-runner
//!
//! Remote-controlled batch move runner. An operator names a config; the runner
//! fetches `<base>/<name>.json` from the config store, executes its moves one
//! after another against the world API, and reports how many succeeded.
//!
//! ## Features
//!
//! - **Step isolation**: a failing move never stops the moves after it
//! - **Lenient documents**: missing or mistyped fields fall back to defaults
//! - **Run history**: the most recent runs are kept in memory for status queries
//! - **Failure notifications**: runs that cannot start are posted to a webhook
//! - **Control surface**: an HTTP API for chat bots and operator tooling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use move_runner::config::EngineConfig;
//! use move_runner::core::BatchRunner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = EngineConfig {
//!         api_key: Some("secret".to_string()),
//!         config_base: Some("https://raw.githubusercontent.com/acme/configs/main".to_string()),
//!         default_api_url: None,
//!     };
//!     let runner = BatchRunner::with_http(engine, reqwest::Client::new());
//!
//!     let result = runner.run("lager_1").await?;
//!     println!("{}/{} moves succeeded", result.ok_count, result.total);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Settings;
pub use crate::core::{BatchResult, BatchRunner};
pub use services::{MoveService, RunCommand, RunReport};
pub use utils::error::{MoveError, Result, StepError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

/// Build information of the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: option_env!("MOVE_RUNNER_BUILD_TIME").unwrap_or("unknown"),
        git_hash: option_env!("MOVE_RUNNER_GIT_HASH").unwrap_or("unknown"),
    }
}
