//! Configuration data models
//!
//! This module defines all configuration structures used by the runner.

#![allow(missing_docs)]

pub mod engine;
pub mod notify;
pub mod runtime;
pub mod server;

pub use engine::*;
pub use notify::*;
pub use runtime::*;
pub use server::*;

/// Literal operation API endpoint used when neither the document nor the
/// settings name one
pub const FALLBACK_API_URL: &str = "https://api.germanminer.de/v2/world/move/content";

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default per-request timeout for outbound calls, in seconds
pub fn default_http_timeout() -> u64 {
    30
}

/// Default user agent sent to the config store and operation API
pub fn default_user_agent() -> String {
    format!("move-runner/{}", env!("CARGO_PKG_VERSION"))
}

/// Default run history capacity
pub fn default_history_capacity() -> usize {
    20
}

/// Default notification timeout, in seconds
pub fn default_notify_timeout() -> u64 {
    10
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Mask a secret for display, keeping a short prefix and suffix of long values
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
