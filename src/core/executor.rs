//! Operation API access and response classification

use super::types::{ExecutionParams, MoveOperation};
use crate::utils::error::StepError;
use async_trait::async_trait;
use serde_json::Value;

/// Reason reported when a failed response carries no `error` field
pub const UNKNOWN_FAILURE: &str = "unknown";

/// Executes single moves against the operation API
#[async_trait]
pub trait MoveExecutor: Send + Sync {
    /// Send one move request and return the parsed response body
    ///
    /// Exactly one request per call; errors cover transport and body decoding.
    async fn execute(
        &self,
        params: &ExecutionParams,
        op: &MoveOperation,
    ) -> Result<Value, StepError>;
}

/// Decide whether a response body reports success
///
/// Success needs an object with a truthy `success` field. Anything else is a
/// failure whose reason is the body's truthy `error` field, or
/// [`UNKNOWN_FAILURE`].
pub fn classify_response(body: &Value) -> Result<(), StepError> {
    let Value::Object(fields) = body else {
        return Err(StepError::Rejected(UNKNOWN_FAILURE.to_string()));
    };

    if fields.get("success").is_some_and(is_truthy) {
        return Ok(());
    }

    let reason = match fields.get("error") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(other) if is_truthy(other) => other.to_string(),
        _ => UNKNOWN_FAILURE.to_string(),
    };
    Err(StepError::Rejected(reason))
}

/// JSON truthiness: false, null, 0 and "" are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Operation API reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpMoveExecutor {
    client: reqwest::Client,
}

impl HttpMoveExecutor {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MoveExecutor for HttpMoveExecutor {
    async fn execute(
        &self,
        params: &ExecutionParams,
        op: &MoveOperation,
    ) -> Result<Value, StepError> {
        let response = self
            .client
            .get(&params.api_url)
            .query(&params.query_for(op))
            .send()
            .await?;

        // The status code is not inspected, the body alone decides success
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| StepError::Decode(format!("invalid JSON response: {}", e)))
    }
}
