//! SQLite-backed film catalog.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use super::database::connection::{database_path, establish};
use super::database::model::{CategoryRow, FilmListingRow};
use super::database::schema::{category, film, film_category};
use crate::domain::{FilmRow, GenreRow, Page, YearRange};
use crate::error::Result;
use crate::port::FilmCatalog;

/// Film catalog over one SQLite connection.
///
/// The connection lives as long as this value; dropping it on any exit
/// path closes the connection.
pub struct SqliteCatalog {
    conn: SqliteConnection,
    target: String,
}

impl SqliteCatalog {
    /// Open the catalog at `target` (a path or `sqlite://` URL).
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be opened.
    pub fn open(target: &str) -> Result<Self> {
        let conn = establish(target)?;
        info!(catalog = database_path(target), "catalog connection opened");
        Ok(Self {
            conn,
            target: database_path(target).to_string(),
        })
    }

    /// The catalog location this connection was opened with.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Drop for SqliteCatalog {
    fn drop(&mut self) {
        info!(catalog = %self.target, "catalog connection closed");
    }
}

impl FilmCatalog for SqliteCatalog {
    fn genres(&mut self) -> Result<Vec<GenreRow>> {
        let rows: Vec<CategoryRow> = category::table
            .select(CategoryRow::as_select())
            .order(category::category_id.asc())
            .load(&mut self.conn)?;
        Ok(rows.into_iter().map(GenreRow::from).collect())
    }

    fn genre_name(&mut self, genre_id: i32) -> Result<Option<String>> {
        let name = category::table
            .filter(category::category_id.eq(genre_id))
            .select(category::name)
            .first::<String>(&mut self.conn)
            .optional()?;
        Ok(name)
    }

    fn films_by_title(&mut self, keyword: &str, page: Page) -> Result<Vec<FilmRow>> {
        let pattern = format!("%{keyword}%");
        let rows: Vec<FilmListingRow> = film::table
            .inner_join(film_category::table.on(film_category::film_id.eq(film::film_id)))
            .inner_join(category::table.on(category::category_id.eq(film_category::category_id)))
            .filter(film::title.like(pattern))
            .select((film::title, film::release_year, category::name))
            .order(film::film_id.asc())
            .limit(page.limit)
            .offset(page.offset)
            .load(&mut self.conn)?;

        debug!(keyword, offset = page.offset, rows = rows.len(), "title page fetched");
        Ok(rows.into_iter().map(FilmRow::from).collect())
    }

    fn films_by_genre_and_years(
        &mut self,
        genre_id: i32,
        years: YearRange,
        page: Page,
    ) -> Result<Vec<FilmRow>> {
        let rows: Vec<FilmListingRow> = film::table
            .inner_join(film_category::table.on(film_category::film_id.eq(film::film_id)))
            .inner_join(category::table.on(category::category_id.eq(film_category::category_id)))
            .filter(category::category_id.eq(genre_id))
            .filter(film::release_year.between(years.start(), years.end()))
            .select((film::title, film::release_year, category::name))
            .order(film::film_id.asc())
            .limit(page.limit)
            .offset(page.offset)
            .load(&mut self.conn)?;

        debug!(
            genre_id,
            from = years.start(),
            to = years.end(),
            offset = page.offset,
            rows = rows.len(),
            "genre page fetched"
        );
        Ok(rows.into_iter().map(FilmRow::from).collect())
    }
}
