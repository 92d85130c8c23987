//! Colorized tables for search results and query statistics.

use owo_colors::OwoColorize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::warn;

use crate::domain::query::{GENRE_YEAR, KEYWORD};
use crate::domain::{FilmRow, GenreRow, QueryTally, RecentQuery};

/// The two table styles used by the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Header rule only; used for films and genres.
    Psql,
    /// Fully bordered ASCII grid; used for statistics.
    Grid,
}

/// Color `text` by query type: keyword green, genre/year blue, else red.
#[must_use]
pub fn colorize(kind: &str, text: &str) -> String {
    match kind {
        KEYWORD => text.green().to_string(),
        GENRE_YEAR => text.blue().to_string(),
        _ => text.red().to_string(),
    }
}

/// Render rows under `headers`.
///
/// Returns an empty string when any row's width differs from the header's.
#[must_use]
pub fn format_table(headers: &[&str], rows: &[Vec<String>], style: TableStyle) -> String {
    if let Some(bad) = rows.iter().find(|row| row.len() != headers.len()) {
        warn!(
            expected = headers.len(),
            found = bad.len(),
            "table row width mismatch"
        );
        return String::new();
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for row in rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    match style {
        TableStyle::Psql => table.with(Style::psql()),
        TableStyle::Grid => table.with(Style::ascii()),
    };
    table.to_string()
}

#[must_use]
pub fn render_films(films: &[FilmRow]) -> String {
    let rows: Vec<Vec<String>> = films
        .iter()
        .map(|film| {
            vec![
                colorize(KEYWORD, &film.title),
                film.release_year.to_string(),
                colorize(GENRE_YEAR, &film.category),
            ]
        })
        .collect();
    format_table(&["Title", "Year", "Genre"], &rows, TableStyle::Psql)
}

#[must_use]
pub fn render_genres(genres: &[GenreRow]) -> String {
    let rows: Vec<Vec<String>> = genres
        .iter()
        .map(|genre| {
            vec![
                genre.category_id.to_string(),
                colorize(GENRE_YEAR, &genre.name),
            ]
        })
        .collect();
    format_table(&["ID", "Genre"], &rows, TableStyle::Psql)
}

#[must_use]
pub fn render_top_queries(top: &[QueryTally]) -> String {
    let rows: Vec<Vec<String>> = top
        .iter()
        .map(|tally| {
            vec![
                colorize(&tally.kind, &tally.kind),
                colorize(&tally.kind, &tally.text),
                tally.count.to_string(),
            ]
        })
        .collect();
    format_table(
        &["Query type", "Query", "Times requested"],
        &rows,
        TableStyle::Grid,
    )
}

#[must_use]
pub fn render_last_queries(last: &[RecentQuery]) -> String {
    let rows: Vec<Vec<String>> = last
        .iter()
        .map(|recent| {
            vec![
                colorize(&recent.kind, &recent.kind),
                colorize(&recent.kind, &recent.text),
                recent.results.map(|r| r.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    format_table(
        &["Query type", "Query", "Films found"],
        &rows,
        TableStyle::Grid,
    )
}
