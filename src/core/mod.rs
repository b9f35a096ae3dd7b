//! Config-driven batch engine
//!
//! A run resolves the engine settings, fetches one named document from the
//! config store, and executes its moves strictly in order against the
//! operation API.

pub mod executor;
pub mod fetcher;
pub mod runner;
pub mod types;


pub use executor::{HttpMoveExecutor, MoveExecutor, UNKNOWN_FAILURE, classify_response, is_truthy};
pub use fetcher::{ConfigSource, HttpConfigSource, config_url};
pub use runner::BatchRunner;
pub use types::{
    BatchResult, BatchTally, ExecutionParams, MAX_REPORTED_ERRORS, MoveConfig, MoveOperation,
    Position,
};
