//! Search queries and the history records kept for them.
//!
//! A [`SearchQuery`] carries only the parameters that belong to its kind.
//! Parameters are optional because an abandoned search (bad input, store
//! failure) is still recorded, just without them.

use chrono::{DateTime, Utc};

use super::error::ValidationError;
use super::film::YearRange;

/// Type label of a title keyword search.
pub const KEYWORD: &str = "keyword";

/// Type label of a genre and release-year search.
pub const GENRE_YEAR: &str = "genre_year";

/// Validated parameters of a genre and year-range search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreYearFilter {
    pub genre_id: i32,
    pub genre_name: String,
    pub years: YearRange,
}

/// Genre search parameters as recorded in the history.
///
/// Every field is optional: an abandoned search has none of them, and
/// history written by other tools may carry any subset or values outside
/// the range accepted for new searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreYearParams {
    pub genre_id: Option<i32>,
    pub genre_name: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl From<GenreYearFilter> for GenreYearParams {
    fn from(filter: GenreYearFilter) -> Self {
        Self {
            genre_id: Some(filter.genre_id),
            genre_name: Some(filter.genre_name),
            year_from: Some(filter.years.start()),
            year_to: Some(filter.years.end()),
        }
    }
}

/// A search as it is recorded in the query history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Title substring search.
    Keyword { keyword: Option<String> },
    /// Category plus inclusive release-year range.
    GenreYear(GenreYearParams),
    /// Any other type label found in the history.
    Other { kind: String, query: Option<String> },
}

impl SearchQuery {
    /// A keyword search that ran with the given keyword.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::Keyword {
            keyword: Some(keyword.into()),
        }
    }

    /// A genre/year search that ran with the given filter.
    #[must_use]
    pub fn genre_year(filter: GenreYearFilter) -> Self {
        Self::GenreYear(filter.into())
    }

    /// The type label stored with the record.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Keyword { .. } => KEYWORD,
            Self::GenreYear(_) => GENRE_YEAR,
            Self::Other { kind, .. } => kind,
        }
    }

    /// The same kind of search with its parameters dropped.
    #[must_use]
    pub fn without_params(&self) -> Self {
        match self {
            Self::Keyword { .. } => Self::Keyword { keyword: None },
            Self::GenreYear(_) => Self::GenreYear(GenreYearParams::default()),
            Self::Other { kind, .. } => Self::Other {
                kind: kind.clone(),
                query: None,
            },
        }
    }
}

/// One entry of the query history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub query: SearchQuery,
    /// Matched row count. Always present for records written here.
    pub results: Option<u64>,
    /// Insertion time. Always present for records written here.
    pub created_at: Option<DateTime<Utc>>,
}

impl QueryRecord {
    /// Stamp a finished search with the current time.
    #[must_use]
    pub fn now(query: SearchQuery, results: u64) -> Self {
        Self {
            query,
            results: Some(results),
            created_at: Some(Utc::now()),
        }
    }
}

/// How a search flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Parameters were accepted and every requested page was shown.
    Found { query: SearchQuery, total: u64 },
    /// Input was rejected before any film rows were queried.
    Rejected(ValidationError),
}

impl SearchOutcome {
    /// Total rows shown to the user; zero for rejected searches.
    #[must_use]
    pub fn total(&self) -> u64 {
        match self {
            Self::Found { total, .. } => *total,
            Self::Rejected(_) => 0,
        }
    }
}
