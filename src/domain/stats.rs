//! Query history statistics.
//!
//! Both summaries are computed fresh from the full history on every
//! request. Input is expected newest first, as the record store returns it.

use std::collections::HashMap;

use super::query::{GenreYearParams, QueryRecord, SearchQuery};

/// Number of rows in each summary table.
pub const SUMMARY_LEN: usize = 5;

/// How often one (type, query text) pair appears in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTally {
    pub kind: String,
    pub text: String,
    pub count: u64,
}

/// One row of the most-recent-queries summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentQuery {
    pub kind: String,
    pub text: String,
    pub results: Option<u64>,
}

/// Human-readable form of a query, without its type.
///
/// Keyword searches show the keyword, genre searches show
/// `"<genre> (<from>-<to>)"`, other kinds show their stored query text.
/// Missing values are left blank, so a genre search recorded without
/// parameters shows `" (-)"`.
#[must_use]
pub fn display_text(query: &SearchQuery) -> String {
    match query {
        SearchQuery::Keyword { keyword } => keyword.clone().unwrap_or_default(),
        SearchQuery::GenreYear(params) => genre_text(params),
        SearchQuery::Other { query, .. } => query.clone().unwrap_or_default(),
    }
}

fn genre_text(params: &GenreYearParams) -> String {
    let year = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_default();
    format!(
        "{} ({}-{})",
        params.genre_name.as_deref().unwrap_or_default().trim(),
        year(params.year_from),
        year(params.year_to)
    )
}

/// The tally key for a record, or `None` when it should not be counted.
///
/// Records with a blank type are skipped, as are keyword and other
/// records with a blank query text. Genre text always has its brackets,
/// so genre records are always counted.
#[must_use]
pub fn type_and_query(record: &QueryRecord) -> Option<(String, String)> {
    let kind = record.query.kind().trim();
    if kind.is_empty() {
        return None;
    }
    let text = match &record.query {
        SearchQuery::Keyword { keyword } => keyword.as_deref().unwrap_or_default().trim().to_string(),
        SearchQuery::GenreYear(params) => genre_text(params),
        SearchQuery::Other { query, .. } => query.as_deref().unwrap_or_default().trim().to_string(),
    };
    if text.is_empty() {
        return None;
    }
    Some((kind.to_string(), text))
}

/// The most frequent (type, query text) pairs, most frequent first.
///
/// Ties keep the order in which the pair was first seen in `records`,
/// so with newest-first input the more recently used pair wins.
#[must_use]
pub fn top_queries(records: &[QueryRecord]) -> Vec<QueryTally> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut tallies: Vec<QueryTally> = Vec::new();

    for (kind, text) in records.iter().filter_map(type_and_query) {
        match index.get(&(kind.clone(), text.clone())) {
            Some(&slot) => tallies[slot].count += 1,
            None => {
                index.insert((kind.clone(), text.clone()), tallies.len());
                tallies.push(QueryTally {
                    kind,
                    text,
                    count: 1,
                });
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies.truncate(SUMMARY_LEN);
    tallies
}

/// The first [`SUMMARY_LEN`] records, in the order given.
#[must_use]
pub fn last_queries(records: &[QueryRecord]) -> Vec<RecentQuery> {
    records
        .iter()
        .take(SUMMARY_LEN)
        .map(|record| RecentQuery {
            kind: record.query.kind().to_string(),
            text: display_text(&record.query),
            results: record.results,
        })
        .collect()
}
