//! Query history use cases.
//!
//! Writing and reading the history is best effort: failures are logged
//! and absorbed here so they never interrupt a search or the menu.

use tracing::{debug, error};

use crate::domain::{QueryRecord, SearchQuery};
use crate::port::RecordStore;

/// Record a finished search, stamped with the current time.
///
/// Returns `true` when the record was stored.
pub async fn log_search<S: RecordStore>(store: &mut S, query: SearchQuery, results: u64) -> bool {
    let record = QueryRecord::now(query, results);
    match store.insert(&record).await {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, kind = record.query.kind(), "failed to record search");
            false
        }
    }
}

/// The full query history, newest first.
///
/// Returns an empty history when the store cannot be read.
pub async fn fetch_all<S: RecordStore>(store: &mut S) -> Vec<QueryRecord> {
    match store.find_newest_first().await {
        Ok(records) => {
            debug!(count = records.len(), "query history loaded");
            records
        }
        Err(e) => {
            error!(error = %e, "failed to load query history");
            Vec::new()
        }
    }
}
