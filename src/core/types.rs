//! Batch engine data model
//!
//! Documents from the config store are read leniently: every field may be
//! missing or have the wrong type and falls back to its default.

use crate::utils::error::StepError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Most step errors reported back in a [`BatchResult`]
pub const MAX_REPORTED_ERRORS: usize = 8;

/// A named configuration document after defaulting
#[derive(Debug, Clone, PartialEq)]
pub struct MoveConfig {
    /// Operation API endpoint override
    pub api_url: Option<String>,
    /// Whether the API should load chunks, `true` unless the document says otherwise
    pub load_chunks: bool,
    /// Raw move descriptors in execution order
    pub moves: Vec<Value>,
}

impl MoveConfig {
    /// Apply the document defaults to a parsed JSON value
    pub fn from_value(document: Value) -> Self {
        let Value::Object(mut fields) = document else {
            return Self {
                api_url: None,
                load_chunks: true,
                moves: Vec::new(),
            };
        };

        let api_url = match fields.remove("apiUrl") {
            Some(Value::String(url)) if !url.is_empty() => Some(url),
            _ => None,
        };
        let load_chunks = match fields.get("loadChunks") {
            Some(Value::Bool(flag)) => *flag,
            _ => true,
        };
        let moves = match fields.remove("moves") {
            Some(Value::Array(moves)) => moves,
            _ => Vec::new(),
        };

        Self {
            api_url,
            load_chunks,
            moves,
        }
    }
}

/// A 3-coordinate position, each value kept in the literal form it is sent as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Position {
    fn from_value(field: &str, value: Option<&Value>) -> Result<Self, StepError> {
        let Some(Value::Object(coords)) = value else {
            return Err(StepError::InvalidMove(format!("missing '{}' position", field)));
        };

        let coord = |axis: &str| {
            coords
                .get(axis)
                .and_then(literal)
                .ok_or_else(|| StepError::InvalidMove(format!("missing coordinate {}.{}", field, axis)))
        };

        Ok(Self {
            x: coord("x")?,
            y: coord("y")?,
            z: coord("z")?,
        })
    }
}

/// Literal query string form of a coordinate value
fn literal(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_literal(n)),
        other => Some(other.to_string()),
    }
}

/// Number formatting as the world API's JavaScript clients send it:
/// integral floats drop the fraction and large or tiny magnitudes use a
/// signed exponent (`64.0` is `64`, `1e21` is `1e+21`).
fn number_literal(n: &serde_json::Number) -> String {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };

    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", f);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// One move from a source position to a destination position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOperation {
    pub from: Position,
    pub to: Position,
}

impl MoveOperation {
    /// Decode a raw move descriptor; a bad descriptor fails only its own step
    pub fn from_value(value: &Value) -> Result<Self, StepError> {
        Ok(Self {
            from: Position::from_value("from", value.get("from"))?,
            to: Position::from_value("to", value.get("to"))?,
        })
    }
}

/// Parameters shared by every step of one batch
#[derive(Clone, PartialEq, Eq)]
pub struct ExecutionParams {
    pub api_key: String,
    pub api_url: String,
    pub load_chunks: bool,
}

impl std::fmt::Debug for ExecutionParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionParams")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .field("load_chunks", &self.load_chunks)
            .finish()
    }
}

impl ExecutionParams {
    /// Query parameters for one move request
    pub fn query_for(&self, op: &MoveOperation) -> Vec<(&'static str, String)> {
        vec![
            ("key", self.api_key.clone()),
            ("fromX", op.from.x.clone()),
            ("fromY", op.from.y.clone()),
            ("fromZ", op.from.z.clone()),
            ("toX", op.to.x.clone()),
            ("toY", op.to.y.clone()),
            ("toZ", op.to.z.clone()),
            ("loadChunks", self.load_chunks.to_string()),
        ]
    }
}

/// Aggregate outcome of one batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// True iff no step failed
    pub ok: bool,
    /// Number of move descriptors in the batch
    pub total: usize,
    pub ok_count: usize,
    pub fail_count: usize,
    /// First failures in execution order, at most [`MAX_REPORTED_ERRORS`]
    pub errors: Vec<String>,
}

impl BatchResult {
    /// Result of a document without moves
    pub fn empty() -> Self {
        Self {
            ok: true,
            total: 0,
            ok_count: 0,
            fail_count: 0,
            errors: Vec::new(),
        }
    }

    /// The document was empty or malformed; callers must not report this as success
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// One-line summary for the run history
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "empty or malformed config".to_string()
        } else if self.ok {
            format!("{}/{} ok", self.ok_count, self.total)
        } else {
            format!(
                "{}/{} ok, {} failed",
                self.ok_count, self.total, self.fail_count
            )
        }
    }
}

/// Collects step outcomes while a batch runs
#[derive(Debug, Default)]
pub struct BatchTally {
    total: usize,
    ok_count: usize,
    fail_count: usize,
    errors: Vec<String>,
}

impl BatchTally {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn record_success(&mut self) {
        self.ok_count += 1;
    }

    /// Record a failed step; `index` is zero based
    pub fn record_failure(&mut self, index: usize, reason: &StepError) {
        self.fail_count += 1;
        if self.errors.len() < MAX_REPORTED_ERRORS {
            self.errors.push(format!("Step {}: {}", index + 1, reason));
        }
    }

    pub fn finish(self) -> BatchResult {
        BatchResult {
            ok: self.fail_count == 0,
            total: self.total,
            ok_count: self.ok_count,
            fail_count: self.fail_count,
            errors: self.errors,
        }
    }
}
