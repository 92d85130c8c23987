//! Search parameter validation errors.
//!
//! These are not failures of the program. A search that hits one of them
//! is abandoned, the message is shown to the user, and the search is still
//! recorded with zero results.
//!
//! # Examples
//!
//! ```
//! use filmsearch::domain::error::ValidationError;
//! use filmsearch::domain::film::YearRange;
//!
//! let result = YearRange::parse("2020", "2010");
//! assert!(matches!(result, Err(ValidationError::YearsReversed)));
//! ```

use thiserror::Error;

use super::film::{MAX_YEAR, MIN_YEAR};

/// Errors that occur when user-supplied search parameters are rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The title keyword was blank.
    #[error("Keyword cannot be empty.")]
    EmptyKeyword,

    /// The genre ID contained something other than digits.
    #[error("Genre ID must be a number.")]
    GenreIdNotNumeric,

    /// No category exists with the requested ID.
    #[error("Genre with ID {genre_id} not found.")]
    UnknownGenre {
        /// The ID the user asked for.
        genre_id: i32,
    },

    /// One of the years contained something other than digits.
    #[error("Year must be a number.")]
    YearNotNumeric,

    /// The lower bound was after the upper bound.
    #[error("The 'from' year cannot be greater than the 'to' year.")]
    YearsReversed,

    /// A year fell outside the catalog's coverage.
    #[error("Year must be between {} and {}.", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange,
}
