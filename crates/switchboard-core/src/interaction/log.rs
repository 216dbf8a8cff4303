//! Append-only in-memory interaction log.
//!
//! The log is the only mutable state shared between requests. Appends and
//! snapshots take a short mutex; a poisoned lock is recovered rather than
//! propagated, since a record is never left half-written.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use switchboard_types::interaction::InteractionRecord;

/// Point-in-time copy of the log, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct LogSnapshot {
    pub total_interactions: usize,
    pub logs: Vec<InteractionRecord>,
}

#[derive(Debug, Default)]
pub struct InteractionLog {
    records: Mutex<Vec<InteractionRecord>>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<InteractionRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append one record. No dedup, no cap.
    pub fn record(&self, record: InteractionRecord) {
        self.lock().push(record);
    }

    pub fn list(&self) -> LogSnapshot {
        let logs = self.lock().clone();
        LogSnapshot {
            total_interactions: logs.len(),
            logs,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
