//! Catalog row types and search parameter primitives.

use super::error::ValidationError;

/// Earliest release year covered by the catalog.
pub const MIN_YEAR: i32 = 1990;

/// Latest release year covered by the catalog.
pub const MAX_YEAR: i32 = 2025;

/// Rows fetched per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// One film as shown in search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRow {
    pub title: String,
    pub release_year: i32,
    pub category: String,
}

/// One category as offered to the genre prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRow {
    pub category_id: i32,
    pub name: String,
}

/// A `LIMIT`/`OFFSET` window over a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// The first page of the given size.
    #[must_use]
    pub const fn first(limit: i64) -> Self {
        Self { limit, offset: 0 }
    }

    /// The page immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset + self.limit,
        }
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        self.offset == 0
    }
}

/// An inclusive, validated release-year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    from: i32,
    to: i32,
}

impl YearRange {
    /// Validate raw user input into a year range.
    ///
    /// Checks run in a fixed order: both values numeric, `from <= to`,
    /// then both within [`MIN_YEAR`]..=[`MAX_YEAR`].
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] that applies.
    pub fn parse(from_raw: &str, to_raw: &str) -> Result<Self, ValidationError> {
        let from_raw = from_raw.trim();
        let to_raw = to_raw.trim();
        if !is_digits(from_raw) || !is_digits(to_raw) {
            return Err(ValidationError::YearNotNumeric);
        }

        // Digit strings too long for i32 are certainly out of range.
        let from: i32 = from_raw
            .parse()
            .map_err(|_| ValidationError::YearOutOfRange)?;
        let to: i32 = to_raw.parse().map_err(|_| ValidationError::YearOutOfRange)?;

        Self::new(from, to)
    }

    /// Validate an already-numeric year range.
    ///
    /// # Errors
    /// Returns [`ValidationError::YearsReversed`] or
    /// [`ValidationError::YearOutOfRange`].
    pub fn new(from: i32, to: i32) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError::YearsReversed);
        }
        let covered = MIN_YEAR..=MAX_YEAR;
        if !covered.contains(&from) || !covered.contains(&to) {
            return Err(ValidationError::YearOutOfRange);
        }
        Ok(Self { from, to })
    }

    /// First year of the range.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.from
    }

    /// Last year of the range, inclusive.
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.to
    }
}

/// Parse a genre ID typed by the user.
///
/// # Errors
/// Returns [`ValidationError::GenreIdNotNumeric`] unless the input is a
/// non-empty run of ASCII digits that fits an `i32`.
pub fn parse_genre_id(raw: &str) -> Result<i32, ValidationError> {
    let raw = raw.trim();
    if !is_digits(raw) {
        return Err(ValidationError::GenreIdNotNumeric);
    }
    raw.parse().map_err(|_| ValidationError::GenreIdNotNumeric)
}

/// Normalize a title keyword, rejecting blank input.
///
/// # Errors
/// Returns [`ValidationError::EmptyKeyword`] for blank input.
pub fn parse_keyword(raw: &str) -> Result<String, ValidationError> {
    let keyword = raw.trim();
    if keyword.is_empty() {
        return Err(ValidationError::EmptyKeyword);
    }
    Ok(keyword.to_string())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_advances_by_limit() {
        let page = Page::first(10);
        assert!(page.is_first());
        let next = page.next();
        assert_eq!(next, Page { limit: 10, offset: 10 });
        assert_eq!(next.next().offset, 20);
        assert!(!next.is_first());
    }

    #[test]
    fn year_range_accepts_single_year() {
        let range = YearRange::parse("2005", "2005").unwrap();
        assert_eq!(range.start(), 2005);
        assert_eq!(range.end(), 2005);
    }

    #[test]
    fn year_range_accepts_bounds() {
        assert!(YearRange::parse("1990", "2025").is_ok());
    }

    #[test]
    fn year_range_trims_whitespace() {
        assert!(YearRange::parse(" 2000 ", "2001\n").is_ok());
    }

    #[test]
    fn year_range_rejects_non_numeric() {
        assert_eq!(
            YearRange::parse("abc", "2000"),
            Err(ValidationError::YearNotNumeric)
        );
        assert_eq!(
            YearRange::parse("2000", ""),
            Err(ValidationError::YearNotNumeric)
        );
        assert_eq!(
            YearRange::parse("-2000", "2001"),
            Err(ValidationError::YearNotNumeric)
        );
    }

    #[test]
    fn year_range_reversed_is_checked_before_bounds() {
        assert_eq!(
            YearRange::parse("2030", "1980"),
            Err(ValidationError::YearsReversed)
        );
    }

    #[test]
    fn year_range_rejects_out_of_bounds() {
        assert_eq!(
            YearRange::parse("1989", "2000"),
            Err(ValidationError::YearOutOfRange)
        );
        assert_eq!(
            YearRange::parse("2000", "2026"),
            Err(ValidationError::YearOutOfRange)
        );
        assert_eq!(
            YearRange::parse("2000", "99999999999"),
            Err(ValidationError::YearOutOfRange)
        );
    }

    #[test]
    fn genre_id_must_be_digits() {
        assert_eq!(parse_genre_id("7"), Ok(7));
        assert_eq!(parse_genre_id(" 12 "), Ok(12));
        assert_eq!(parse_genre_id("x"), Err(ValidationError::GenreIdNotNumeric));
        assert_eq!(parse_genre_id(""), Err(ValidationError::GenreIdNotNumeric));
        assert_eq!(parse_genre_id("-1"), Err(ValidationError::GenreIdNotNumeric));
    }

    #[test]
    fn keyword_is_trimmed_and_required() {
        assert_eq!(parse_keyword("  love "), Ok("love".to_string()));
        assert_eq!(parse_keyword("   "), Err(ValidationError::EmptyKeyword));
    }
}
