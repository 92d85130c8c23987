//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::category;
use crate::domain::{FilmRow, GenreRow};

/// One joined film/category row from a search query.
#[derive(Queryable, Debug, Clone)]
pub struct FilmListingRow {
    pub title: String,
    pub release_year: i32,
    pub category: String,
}

/// Database row for a category.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = category)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryRow {
    pub category_id: i32,
    pub name: String,
}

impl From<FilmListingRow> for FilmRow {
    fn from(row: FilmListingRow) -> Self {
        Self {
            title: row.title,
            release_year: row.release_year,
            category: row.category,
        }
    }
}

impl From<CategoryRow> for GenreRow {
    fn from(row: CategoryRow) -> Self {
        Self {
            category_id: row.category_id,
            name: row.name,
        }
    }
}
