//! Query history persistence port.

use std::future::Future;

use crate::domain::QueryRecord;
use crate::error::Result;

/// Storage operations for the query history.
///
/// Records are append-only: nothing here updates or deletes them.
pub trait RecordStore: Send {
    /// Append one record.
    fn insert(&mut self, record: &QueryRecord) -> impl Future<Output = Result<()>> + Send;

    /// Every stored record, newest first.
    fn find_newest_first(&mut self) -> impl Future<Output = Result<Vec<QueryRecord>>> + Send;

    /// Release the underlying connection.
    ///
    /// Must be safe to call repeatedly and on a store that never connected.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}
