//! Error types for the move runner
//!
//! This module defines all error types used throughout the runner.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the runner
pub type Result<T> = std::result::Result<T, MoveError>;

/// Main error type for the runner
///
/// The first three variants are the fatal kinds a batch can end with. They are
/// raised before any step runs and reach the caller unchanged.
#[derive(Error, Debug)]
pub enum MoveError {
    /// A required process-wide setting is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The config store was unreachable or answered with a non-success status
    #[error("Config download failed ({reason}): {url}")]
    ConfigFetch {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    /// The config store body was not valid JSON
    #[error("Config could not be parsed: {0}")]
    ConfigParse(String),

    /// Invalid request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Caller is not allowed to run configs
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unauthorized errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notification(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MoveError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Config store answered, but not with a 2xx
    pub fn config_status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::ConfigFetch {
            url: url.into(),
            status: Some(status.as_u16()),
            reason: status.to_string(),
        }
    }

    /// Config store could not be reached at all
    pub fn config_unreachable(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigFetch {
            url: url.into(),
            status: None,
            reason: reason.into(),
        }
    }

    /// Whether this error aborted a batch before any step ran
    pub fn is_fatal_run_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::ConfigFetch { .. } | Self::ConfigParse(_)
        )
    }
}

impl ResponseError for MoveError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            MoveError::Configuration(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            MoveError::ConfigFetch { .. } => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "CONFIG_FETCH_ERROR",
                self.to_string(),
            ),
            MoveError::ConfigParse(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "CONFIG_PARSE_ERROR",
                self.to_string(),
            ),
            MoveError::InvalidRequest(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
                self.to_string(),
            ),
            MoveError::Forbidden(_) => (
                actix_web::http::StatusCode::FORBIDDEN,
                "FORBIDDEN",
                self.to_string(),
            ),
            MoveError::Unauthorized(_) => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// Failure of a single step
///
/// `Display` is the bare reason so it can be embedded in `Step <n>: <reason>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The move descriptor is missing a position or coordinate
    #[error("{0}")]
    InvalidMove(String),

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The response body was not JSON
    #[error("{0}")]
    Decode(String),

    /// The API answered but did not report success
    #[error("{0}")]
    Rejected(String),
}

impl From<reqwest::Error> for StepError {
    /// The request URL carries the API key, so it is stripped from the reason
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url().to_string())
    }
}
