//! Operator-facing messages
//!
//! Chat flavoured markdown; `**` marks bold.

use super::history::RunRecord;
use crate::core::BatchResult;
use crate::utils::error::MoveError;

pub fn render_started(name: &str) -> String {
    format!(
        "Starting **{}** (config is loaded live from the config store)...",
        name
    )
}

pub fn render_denied() -> String {
    "You do not have permission to do that.".to_string()
}

/// Message for a settled run
///
/// An empty or malformed config is never reported as a success.
pub fn render_outcome(name: &str, result: &BatchResult) -> String {
    if result.is_empty() {
        return format!("**{}** is empty or malformed.", name);
    }

    if result.ok {
        return format!(
            "Done: **{}/{}** succeeded.",
            result.ok_count, result.total
        );
    }

    format!(
        "Done: **{}/{}** ok, **{}** failed.\nErrors:\n- {}",
        result.ok_count,
        result.total,
        result.fail_count,
        result.errors.join("\n- ")
    )
}

/// Message for a run that could not start
pub fn render_failure(error: &MoveError) -> String {
    format!("Error: {}", error)
}

/// Status listing, newest first
pub fn render_history(records: &[RunRecord]) -> String {
    if records.is_empty() {
        return "No runs yet.".to_string();
    }

    records
        .iter()
        .map(|record| {
            format!(
                "{} {} **{}** by {} ({} ms): {}",
                record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                if record.ok { "OK" } else { "FAIL" },
                record.name,
                record.user_tag,
                record.duration_ms,
                record.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_empty_is_not_success() {
        let message = render_outcome("lager_1", &BatchResult::empty());
        assert_eq!(message, "**lager_1** is empty or malformed.");
        assert!(!message.contains("Done"));
    }

    #[test]
    fn test_success() {
        let result = BatchResult {
            ok: true,
            total: 3,
            ok_count: 3,
            fail_count: 0,
            errors: vec![],
        };
        assert_eq!(render_outcome("x", &result), "Done: **3/3** succeeded.");
    }

    #[test]
    fn test_partial_lists_errors() {
        let result = BatchResult {
            ok: false,
            total: 3,
            ok_count: 1,
            fail_count: 2,
            errors: vec!["Step 2: timeout".into(), "Step 3: unknown".into()],
        };
        assert_eq!(
            render_outcome("x", &result),
            "Done: **1/3** ok, **2** failed.\nErrors:\n- Step 2: timeout\n- Step 3: unknown"
        );
    }

    #[test]
    fn test_failure_contains_message() {
        let message = render_failure(&MoveError::configuration("API_KEY is missing"));
        assert!(message.starts_with("Error: "));
        assert!(message.contains("API_KEY is missing"));
    }

    #[test]
    fn test_history_rendering() {
        assert_eq!(render_history(&[]), "No runs yet.");

        let record = RunRecord {
            timestamp: Utc::now(),
            name: "lager_1".into(),
            ok: false,
            duration_ms: 40,
            user_tag: "op".into(),
            summary: "1/2 ok, 1 failed".into(),
        };
        let rendered = render_history(&[record.clone(), record]);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("FAIL **lager_1** by op (40 ms): 1/2 ok, 1 failed"));
    }
}
