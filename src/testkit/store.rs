//! In-memory record store implementation for testing.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::QueryRecord;
use crate::error::{Error, Result};
use crate::port::RecordStore;

#[derive(Debug, Default)]
struct State {
    records: Vec<QueryRecord>,
    fail_writes: bool,
    fail_reads: bool,
    closes: usize,
}

/// In-memory query history.
///
/// Clones share state, so a test can keep a handle while the store itself
/// is moved into the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    state: Arc<Mutex<State>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the history, oldest first.
    pub fn with_records(records: impl IntoIterator<Item = QueryRecord>) -> Self {
        let store = Self::new();
        store.state.lock().records.extend(records);
        store
    }

    /// Stored records in insertion order.
    pub fn records(&self) -> Vec<QueryRecord> {
        self.state.lock().records.clone()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().fail_writes = fail;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().fail_reads = fail;
    }

    /// How many times `close` has been called.
    pub fn close_count(&self) -> usize {
        self.state.lock().closes
    }
}

fn unavailable() -> Error {
    Error::Io(std::io::Error::other("record store unavailable"))
}

impl RecordStore for MemoryRecordStore {
    async fn insert(&mut self, record: &QueryRecord) -> Result<()> {
        let mut state = self.state.lock();
        if state.fail_writes {
            return Err(unavailable());
        }
        state.records.push(record.clone());
        Ok(())
    }

    async fn find_newest_first(&mut self) -> Result<Vec<QueryRecord>> {
        let state = self.state.lock();
        if state.fail_reads {
            return Err(unavailable());
        }
        // Later insertions win timestamp ties.
        let mut records: Vec<QueryRecord> = state.records.iter().rev().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn close(&mut self) {
        self.state.lock().closes += 1;
    }
}
