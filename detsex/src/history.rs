//! Experiment history: resolved experiments kept in insertion order.
//!
//! Records pair a configuration with its outcome, an id and a timestamp. The
//! resolver never sees ids or timestamps; they are assigned here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::resolver::resolve;
use crate::core::types::{ExperimentConfig, Outcome};

/// Current `history.json` format version.
pub const HISTORY_VERSION: u32 = 1;

/// A resolved experiment as stored in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Decimal Unix-millisecond timestamp, bumped when already taken.
    pub id: String,
    /// Unix milliseconds at which the experiment was run.
    pub timestamp: i64,
    pub config: ExperimentConfig,
    pub outcome: Outcome,
}

/// Ordered list of past experiments, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub version: u32,
    pub records: Vec<ExperimentRecord>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            version: HISTORY_VERSION,
            records: Vec::new(),
        }
    }
}

impl History {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve `config` and append the result.
    ///
    /// Oldest records are evicted so that at most `limit` remain (never fewer
    /// than the new record itself).
    pub fn record(
        &mut self,
        config: ExperimentConfig,
        now: DateTime<Utc>,
        limit: usize,
    ) -> &ExperimentRecord {
        let timestamp = now.timestamp_millis();
        let record = ExperimentRecord {
            id: self.next_id(timestamp),
            timestamp,
            config,
            outcome: resolve(&config),
        };
        self.records.push(record);
        let limit = limit.max(1);
        if self.records.len() > limit {
            let excess = self.records.len() - limit;
            self.records.drain(..excess);
        }
        &self.records[self.records.len() - 1]
    }

    pub fn find(&self, id: &str) -> Option<&ExperimentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Remove the record with `id`. Returns false if no such record exists.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Configuration of a past experiment, ready to be run again.
    pub fn restore(&self, id: &str) -> Option<ExperimentConfig> {
        self.find(id).map(|record| record.config)
    }

    /// Records from most recent to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &ExperimentRecord> {
        self.records.iter().rev()
    }

    fn next_id(&self, timestamp: i64) -> String {
        let mut candidate = timestamp;
        loop {
            let id = candidate.to_string();
            if self.find(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }
}
