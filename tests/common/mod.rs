//! Common test utilities for move-runner

pub mod fixtures;

pub use fixtures::{
    TEST_API_KEY, TEST_USER_AGENT, engine_for, http_client, move_entry, moves_document,
};
