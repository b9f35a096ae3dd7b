//! Utility modules for the move runner
//!
//! - **error**: error types for fatal run errors and step failures
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{MoveError, Result, StepError};
