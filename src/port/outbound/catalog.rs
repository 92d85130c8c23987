//! Film catalog port.

use crate::domain::{FilmRow, GenreRow, Page, YearRange};
use crate::error::Result;

/// Read-only access to the relational film catalog.
///
/// Every method issues exactly one query. Methods take `&mut self` because
/// the underlying connection is used exclusively by one caller.
pub trait FilmCatalog {
    /// All categories, ordered by ID.
    fn genres(&mut self) -> Result<Vec<GenreRow>>;

    /// The name of the category with `genre_id`, if it exists.
    fn genre_name(&mut self, genre_id: i32) -> Result<Option<String>>;

    /// One page of films whose title contains `keyword`.
    fn films_by_title(&mut self, keyword: &str, page: Page) -> Result<Vec<FilmRow>>;

    /// One page of films in `genre_id` released within `years`.
    fn films_by_genre_and_years(
        &mut self,
        genre_id: i32,
        years: YearRange,
        page: Page,
    ) -> Result<Vec<FilmRow>>;
}
