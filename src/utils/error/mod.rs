//! Error handling utilities
//!
//! Fatal run errors live in [`MoveError`]; per-step failures that are recorded
//! instead of propagated live in [`StepError`].

pub mod error;

pub use error::*;
