//! Throwaway film catalogs.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::model::CategoryRow;
use crate::adapter::outbound::sqlite::database::schema::{category, film, film_category};
use crate::adapter::outbound::sqlite::SqliteCatalog;
use crate::domain::{FilmRow, GenreRow, Page, YearRange};
use crate::error::Result;
use crate::port::FilmCatalog;

const CATALOG_DDL: &str = "
    CREATE TABLE category (
        category_id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL
    );
    CREATE TABLE film (
        film_id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        release_year INTEGER NOT NULL
    );
    CREATE TABLE film_category (
        film_id INTEGER NOT NULL,
        category_id INTEGER NOT NULL,
        PRIMARY KEY (film_id, category_id)
    );
";

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A seeded SQLite catalog file, deleted on drop.
pub struct TempCatalog {
    path: PathBuf,
}

impl TempCatalog {
    pub fn builder() -> TempCatalogBuilder {
        TempCatalogBuilder::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The catalog target as it would appear in configuration.
    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    /// An empty database file with none of the catalog tables, so every
    /// catalog query fails.
    pub fn without_tables() -> Self {
        let path = temp_path();
        std::fs::write(&path, b"").expect("create empty catalog file");
        TempCatalog { path }
    }

    /// Open the catalog read-only, as the application does.
    pub fn open(&self) -> SqliteCatalog {
        SqliteCatalog::open(&self.url()).expect("open temp catalog")
    }
}

impl Drop for TempCatalog {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[derive(Default)]
pub struct TempCatalogBuilder {
    genres: Vec<(i32, String)>,
    films: Vec<(i32, String, i32, i32)>,
}

impl TempCatalogBuilder {
    pub fn genre(mut self, id: i32, name: &str) -> Self {
        self.genres.push((id, name.to_string()));
        self
    }

    /// Add a film filed under one genre.
    pub fn film(mut self, id: i32, title: &str, year: i32, genre_id: i32) -> Self {
        self.films.push((id, title.to_string(), year, genre_id));
        self
    }

    /// Add `count` films titled `"<prefix> <n>"`, all in one genre and year.
    pub fn films(mut self, first_id: i32, count: i32, prefix: &str, year: i32, genre_id: i32) -> Self {
        for n in 0..count {
            self.films
                .push((first_id + n, format!("{prefix} {n}"), year, genre_id));
        }
        self
    }

    pub fn build(self) -> TempCatalog {
        let path = temp_path();
        let mut conn = SqliteConnection::establish(&path.display().to_string())
            .expect("create temp catalog");
        conn.batch_execute(CATALOG_DDL).expect("create catalog tables");

        let genres: Vec<CategoryRow> = self
            .genres
            .into_iter()
            .map(|(category_id, name)| CategoryRow { category_id, name })
            .collect();
        if !genres.is_empty() {
            diesel::insert_into(category::table)
                .values(&genres)
                .execute(&mut conn)
                .expect("insert genres");
        }

        for (id, title, year, genre_id) in self.films {
            diesel::insert_into(film::table)
                .values((
                    film::film_id.eq(id),
                    film::title.eq(title),
                    film::release_year.eq(year),
                ))
                .execute(&mut conn)
                .expect("insert film");
            diesel::insert_into(film_category::table)
                .values((
                    film_category::film_id.eq(id),
                    film_category::category_id.eq(genre_id),
                ))
                .execute(&mut conn)
                .expect("insert film category");
        }

        TempCatalog { path }
    }
}

fn temp_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "filmsearch-{}-{nanos}-{seq}.db",
        std::process::id()
    ));
    path
}

/// Wraps a catalog and counts the queries issued through it.
pub struct CountingCatalog<C> {
    inner: C,
    genre_queries: usize,
    film_queries: usize,
}

impl<C: FilmCatalog> CountingCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            genre_queries: 0,
            film_queries: 0,
        }
    }

    /// Genre list and genre name lookups.
    pub fn genre_queries(&self) -> usize {
        self.genre_queries
    }

    /// Film page fetches.
    pub fn film_queries(&self) -> usize {
        self.film_queries
    }

    pub fn total_queries(&self) -> usize {
        self.genre_queries + self.film_queries
    }
}

impl<C: FilmCatalog> FilmCatalog for CountingCatalog<C> {
    fn genres(&mut self) -> Result<Vec<GenreRow>> {
        self.genre_queries += 1;
        self.inner.genres()
    }

    fn genre_name(&mut self, genre_id: i32) -> Result<Option<String>> {
        self.genre_queries += 1;
        self.inner.genre_name(genre_id)
    }

    fn films_by_title(&mut self, keyword: &str, page: Page) -> Result<Vec<FilmRow>> {
        self.film_queries += 1;
        self.inner.films_by_title(keyword, page)
    }

    fn films_by_genre_and_years(
        &mut self,
        genre_id: i32,
        years: YearRange,
        page: Page,
    ) -> Result<Vec<FilmRow>> {
        self.film_queries += 1;
        self.inner.films_by_genre_and_years(genre_id, years, page)
    }
}
