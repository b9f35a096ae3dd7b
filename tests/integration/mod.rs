//! Integration tests against mock remotes

mod batch_tests;
mod config_store_tests;
mod notification_tests;
mod operation_api_tests;
