//! Stored document shape for query history records.
//!
//! Documents are flat: the `type` field says which of the optional
//! parameter fields are meaningful. Conversion to and from
//! [`QueryRecord`] maps that onto [`SearchQuery`] variants.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::query::{GENRE_YEAR, KEYWORD};
use crate::domain::{GenreYearParams, QueryRecord, SearchQuery};

/// One query history document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDocument {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<i64>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
}

impl From<&QueryRecord> for QueryDocument {
    fn from(record: &QueryRecord) -> Self {
        let mut doc = Self {
            kind: record.query.kind().to_string(),
            results: record.results.and_then(|r| i64::try_from(r).ok()),
            created_at: record
                .created_at
                .map(|ts| bson::DateTime::from_millis(ts.timestamp_millis())),
            ..Self::default()
        };

        match &record.query {
            SearchQuery::Keyword { keyword } => doc.keyword.clone_from(keyword),
            SearchQuery::GenreYear(params) => {
                doc.genre_id = params.genre_id;
                doc.genre_name.clone_from(&params.genre_name);
                doc.year_from = params.year_from;
                doc.year_to = params.year_to;
            }
            SearchQuery::Other { query, .. } => doc.query.clone_from(query),
        }

        doc
    }
}

impl From<QueryDocument> for QueryRecord {
    fn from(doc: QueryDocument) -> Self {
        let query = match doc.kind.as_str() {
            KEYWORD => SearchQuery::Keyword {
                keyword: doc.keyword,
            },
            GENRE_YEAR => SearchQuery::GenreYear(GenreYearParams {
                genre_id: doc.genre_id,
                genre_name: doc.genre_name,
                year_from: doc.year_from,
                year_to: doc.year_to,
            }),
            _ => SearchQuery::Other {
                kind: doc.kind,
                query: doc.query,
            },
        };

        Self {
            query,
            results: doc.results.and_then(|r| u64::try_from(r).ok()),
            created_at: doc
                .created_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp_millis(ts.timestamp_millis())),
        }
    }
}

/// Converts raw history documents, skipping any that do not fit the
/// record shape.
pub fn decode_history(documents: Vec<Document>) -> Vec<QueryRecord> {
    documents
        .into_iter()
        .filter_map(|document| match bson::from_document::<QueryDocument>(document) {
            Ok(doc) => Some(QueryRecord::from(doc)),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable query history document");
                None
            }
        })
        .collect()
}
