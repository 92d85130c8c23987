//! Query statistics view.

use tracing::debug;

use super::{output, table};
use crate::application::query_log;
use crate::domain::stats::{last_queries, top_queries};
use crate::port::RecordStore;

/// Print the top and most recent queries from the full history.
///
/// An unreadable history is shown as empty tables.
pub async fn show_stats<S: RecordStore>(store: &mut S) {
    let records = query_log::fetch_all(store).await;
    let top = top_queries(&records);
    let last = last_queries(&records);
    debug!(
        records = records.len(),
        top = top.len(),
        last = last.len(),
        "statistics computed"
    );

    output::section("Top 5 queries");
    output::block(&table::render_top_queries(&top));

    output::section("Last 5 queries");
    output::block(&table::render_last_queries(&last));
}
