//! Statistics over a stored query history.

use chrono::{Duration, TimeZone, Utc};
use filmsearch::adapter::inbound::cli::stats::show_stats;
use filmsearch::application::query_log::{fetch_all, log_search};
use filmsearch::domain::stats::{last_queries, top_queries};
use filmsearch::domain::{GenreYearFilter, GenreYearParams, QueryRecord, SearchQuery, YearRange};
use filmsearch::testkit::store::MemoryRecordStore;

fn horror() -> SearchQuery {
    SearchQuery::genre_year(GenreYearFilter {
        genre_id: 11,
        genre_name: "Horror".into(),
        years: YearRange::new(2020, 2023).unwrap(),
    })
}

/// Records stamped one minute apart, oldest first.
fn history(queries: Vec<(SearchQuery, u64)>) -> Vec<QueryRecord> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    queries
        .into_iter()
        .enumerate()
        .map(|(i, (query, results))| QueryRecord {
            query,
            results: Some(results),
            created_at: Some(start + Duration::minutes(i as i64)),
        })
        .collect()
}

#[tokio::test]
async fn top_queries_from_stored_history() {
    let mut queries = Vec::new();
    queries.extend((0..3).map(|_| (SearchQuery::keyword("love"), 26)));
    queries.extend((0..5).map(|_| (horror(), 2)));
    queries.push((SearchQuery::keyword("war"), 1));
    let mut store = MemoryRecordStore::with_records(history(queries));

    let records = fetch_all(&mut store).await;
    let top: Vec<(String, String, u64)> = top_queries(&records)
        .into_iter()
        .map(|t| (t.kind, t.text, t.count))
        .collect();

    assert_eq!(
        top,
        vec![
            ("genre_year".into(), "Horror (2020-2023)".into(), 5),
            ("keyword".into(), "love".into(), 3),
            ("keyword".into(), "war".into(), 1),
        ]
    );
}

#[tokio::test]
async fn stored_genre_records_without_full_parameters_are_counted() {
    let partial = |name: Option<&str>, from: Option<i32>, to: Option<i32>| {
        SearchQuery::GenreYear(GenreYearParams {
            genre_id: None,
            genre_name: name.map(str::to_string),
            year_from: from,
            year_to: to,
        })
    };
    let mut store = MemoryRecordStore::with_records(history(vec![
        (partial(Some("Horror"), Some(1985), Some(1987)), 0),
        (partial(None, None, None), 0),
        (partial(None, None, None), 0),
    ]));

    let records = fetch_all(&mut store).await;
    let last: Vec<String> = last_queries(&records).into_iter().map(|r| r.text).collect();
    assert_eq!(last, vec![" (-)", " (-)", "Horror (1985-1987)"]);

    let top: Vec<(String, u64)> = top_queries(&records)
        .into_iter()
        .map(|t| (t.text, t.count))
        .collect();
    assert_eq!(
        top,
        vec![(" (-)".to_string(), 2), ("Horror (1985-1987)".to_string(), 1)]
    );
}

#[tokio::test]
async fn last_queries_are_the_newest_five() {
    let queries = (0..8)
        .map(|n| (SearchQuery::keyword(format!("q{n}")), n))
        .collect();
    let mut store = MemoryRecordStore::with_records(history(queries));

    let records = fetch_all(&mut store).await;
    let last: Vec<String> = last_queries(&records).into_iter().map(|r| r.text).collect();
    assert_eq!(last, vec!["q7", "q6", "q5", "q4", "q3"]);
}

#[tokio::test]
async fn logged_searches_feed_statistics() {
    let mut store = MemoryRecordStore::new();
    log_search(&mut store, SearchQuery::keyword("love"), 3).await;
    log_search(&mut store, SearchQuery::GenreYear(GenreYearParams::default()), 0).await;
    log_search(&mut store, SearchQuery::Keyword { keyword: None }, 0).await;

    let records = fetch_all(&mut store).await;
    // An abandoned genre search is tallied with blank fields; a blank keyword is not.
    let top: Vec<(String, u64)> = top_queries(&records)
        .into_iter()
        .map(|t| (t.text, t.count))
        .collect();
    assert_eq!(top, vec![(" (-)".to_string(), 1), ("love".to_string(), 1)]);
    let last = last_queries(&records);
    assert_eq!(last.len(), 3);
    assert_eq!(last[0].kind, "keyword");
    assert_eq!(last[0].text, "");
    assert_eq!(last[1].kind, "genre_year");
    assert_eq!(last[1].text, " (-)");
    assert_eq!(last[1].results, Some(0));
}

#[tokio::test]
async fn statistics_view_survives_unreadable_history() {
    let mut store = MemoryRecordStore::new();
    store.fail_reads(true);
    show_stats(&mut store).await;
    assert!(fetch_all(&mut store).await.is_empty());
}
