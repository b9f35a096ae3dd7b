//! Bounded in-memory run history

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub ok: bool,
    pub duration_ms: u64,
    pub user_tag: String,
    pub summary: String,
}

/// Helper trait for bounded VecDeque operations
trait BoundedPush<T> {
    fn push_bounded(&mut self, value: T, max_size: usize);
}

impl<T> BoundedPush<T> for VecDeque<T> {
    #[inline]
    fn push_bounded(&mut self, value: T, max_size: usize) {
        while self.len() >= max_size {
            self.pop_front();
        }
        self.push_back(value);
    }
}

/// Most recent runs, oldest evicted first
#[derive(Debug)]
pub struct RunHistory {
    entries: Mutex<VecDeque<RunRecord>>,
    capacity: usize,
}

impl RunHistory {
    /// A capacity of 0 is treated as 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn record(&self, entry: RunRecord) {
        self.entries.lock().push_bounded(entry, self.capacity);
    }

    /// Up to `limit` entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<RunRecord> {
        self.entries.lock().iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RunHistory {
    fn default() -> Self {
        Self::new(crate::config::default_history_capacity())
    }
}
