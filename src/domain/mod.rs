//! Store-agnostic domain types and the statistics computations.

pub mod error;
pub mod film;
pub mod query;
pub mod stats;

pub use error::ValidationError;
pub use film::{FilmRow, GenreRow, Page, YearRange};
pub use query::{GenreYearFilter, GenreYearParams, QueryRecord, SearchOutcome, SearchQuery};
pub use stats::{QueryTally, RecentQuery};
