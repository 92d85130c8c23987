//! The two interactive search flows.
//!
//! Each flow asks for its parameters, validates them, then pages through
//! the matching films until the catalog runs out or the user stops.
//! Rejected input ends the flow before any film rows are queried.

use tracing::{info, warn};

use super::{output, table};
use crate::domain::film::{parse_genre_id, parse_keyword, MAX_YEAR, MIN_YEAR};
use crate::domain::{
    FilmRow, GenreYearFilter, Page, SearchOutcome, SearchQuery, ValidationError, YearRange,
};
use crate::error::Result;
use crate::port::{FilmCatalog, Prompt};

/// Answer that stops pagination. Anything else, including blank, continues.
const STOP: &str = "0";

/// Search film titles for a keyword.
///
/// # Errors
/// Returns an error if the catalog fails or input can no longer be read.
pub fn search_by_title<C, P>(catalog: &mut C, prompt: &mut P, page_size: i64) -> Result<SearchOutcome>
where
    C: FilmCatalog,
    P: Prompt,
{
    let raw = prompt.ask("Enter a keyword to search for in film titles")?;
    let keyword = match parse_keyword(&raw) {
        Ok(keyword) => keyword,
        Err(reason) => return Ok(reject(reason)),
    };

    let total = paginate(prompt, page_size, |page| {
        catalog.films_by_title(&keyword, page)
    })?;

    info!(keyword = %keyword, total, "title search finished");
    Ok(SearchOutcome::Found {
        query: SearchQuery::keyword(keyword),
        total,
    })
}

/// Search films by genre and an inclusive release-year range.
///
/// # Errors
/// Returns an error if the catalog fails or input can no longer be read.
pub fn search_by_genre_and_year<C, P>(
    catalog: &mut C,
    prompt: &mut P,
    page_size: i64,
) -> Result<SearchOutcome>
where
    C: FilmCatalog,
    P: Prompt,
{
    output::section("Available genres");
    output::block(&table::render_genres(&catalog.genres()?));

    let raw = prompt.ask("Enter genre ID")?;
    let genre_id = match parse_genre_id(&raw) {
        Ok(id) => id,
        Err(reason) => return Ok(reject(reason)),
    };
    let Some(genre_name) = catalog.genre_name(genre_id)? else {
        return Ok(reject(ValidationError::UnknownGenre { genre_id }));
    };

    output::note(&format!(
        "Films cover {MIN_YEAR} to {MAX_YEAR}. Enter the same year twice to search a single year."
    ));
    let from = prompt.ask("Year from")?;
    let to = prompt.ask("Year to")?;
    let years = match YearRange::parse(&from, &to) {
        Ok(years) => years,
        Err(reason) => return Ok(reject(reason)),
    };

    let total = paginate(prompt, page_size, |page| {
        catalog.films_by_genre_and_years(genre_id, years, page)
    })?;

    info!(
        genre_id,
        genre = %genre_name,
        from = years.start(),
        to = years.end(),
        total,
        "genre search finished"
    );
    Ok(SearchOutcome::Found {
        query: SearchQuery::genre_year(GenreYearFilter {
            genre_id,
            genre_name,
            years,
        }),
        total,
    })
}

fn reject(reason: ValidationError) -> SearchOutcome {
    warn!(%reason, "search input rejected");
    output::error(&reason.to_string());
    SearchOutcome::Rejected(reason)
}

/// Show pages from `fetch` until one comes back empty or the user stops.
///
/// Returns the number of rows shown.
fn paginate<P, F>(prompt: &mut P, page_size: i64, mut fetch: F) -> Result<u64>
where
    P: Prompt,
    F: FnMut(Page) -> Result<Vec<FilmRow>>,
{
    let mut page = Page::first(page_size);
    let mut total: u64 = 0;

    loop {
        let rows = fetch(page)?;
        if rows.is_empty() {
            if page.is_first() {
                output::warning("No films found.");
            } else {
                output::note("No more films.");
            }
            break;
        }

        output::block(&table::render_films(&rows));
        total += rows.len() as u64;

        let answer = prompt.ask(&format!(
            "Show the next {page_size} films? (Enter to continue, '{STOP}' to stop)"
        ))?;
        if answer.trim() == STOP {
            break;
        }
        page = page.next();
    }

    output::success(&format!("Films found: {total}"));
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::catalog::{CountingCatalog, TempCatalog};
    use crate::testkit::prompt::ScriptedPrompt;

    fn catalog() -> TempCatalog {
        TempCatalog::builder()
            .genre(1, "Action")
            .genre(11, "Horror")
            .films(1, 25, "LOVE STORY", 2010, 11)
            .film(100, "WAR NOTTING", 1998, 1)
            .build()
    }

    #[test]
    fn title_search_counts_rows_across_pages() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["love", "", "", ""]);

        let outcome = search_by_title(&mut catalog, &mut prompt, 10).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                query: SearchQuery::keyword("love"),
                total: 25,
            }
        );
        // Pages of 10, 10, 5, then the empty page that ends the loop.
        assert_eq!(catalog.film_queries(), 4);
    }

    #[test]
    fn stop_answer_ends_pagination_early() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["love", " 0 "]);

        let outcome = search_by_title(&mut catalog, &mut prompt, 10).unwrap();
        assert_eq!(outcome.total(), 10);
        assert_eq!(catalog.film_queries(), 1);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn empty_keyword_issues_no_queries() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["   "]);

        let outcome = search_by_title(&mut catalog, &mut prompt, 10).unwrap();
        assert_eq!(outcome, SearchOutcome::Rejected(ValidationError::EmptyKeyword));
        assert_eq!(catalog.total_queries(), 0);
    }

    #[test]
    fn no_matches_is_found_with_zero() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["zzz"]);

        let outcome = search_by_title(&mut catalog, &mut prompt, 10).unwrap();
        assert_eq!(outcome.total(), 0);
        assert!(matches!(outcome, SearchOutcome::Found { .. }));
        assert_eq!(catalog.film_queries(), 1);
    }

    #[test]
    fn genre_search_returns_filter() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["11", "2005", "2015", "0"]);

        let outcome = search_by_genre_and_year(&mut catalog, &mut prompt, 10).unwrap();
        let SearchOutcome::Found { query, total } = outcome else {
            panic!("expected a found outcome");
        };
        assert_eq!(total, 10);
        assert_eq!(
            query,
            SearchQuery::genre_year(GenreYearFilter {
                genre_id: 11,
                genre_name: "Horror".into(),
                years: YearRange::new(2005, 2015).unwrap(),
            })
        );
    }

    #[test]
    fn reversed_years_issue_no_film_queries() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["11", "2020", "2010"]);

        let outcome = search_by_genre_and_year(&mut catalog, &mut prompt, 10).unwrap();
        assert_eq!(outcome, SearchOutcome::Rejected(ValidationError::YearsReversed));
        assert_eq!(catalog.film_queries(), 0);
    }

    #[test]
    fn unknown_genre_is_rejected_before_years() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["42"]);

        let outcome = search_by_genre_and_year(&mut catalog, &mut prompt, 10).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Rejected(ValidationError::UnknownGenre { genre_id: 42 })
        );
        assert_eq!(prompt.asked().len(), 1);
        assert_eq!(catalog.film_queries(), 0);
    }

    #[test]
    fn non_numeric_genre_is_rejected() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["horror"]);

        let outcome = search_by_genre_and_year(&mut catalog, &mut prompt, 10).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Rejected(ValidationError::GenreIdNotNumeric)
        );
        // Only the genre list was read.
        assert_eq!(catalog.genre_queries(), 1);
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let db = catalog();
        let mut catalog = CountingCatalog::new(db.open());
        let mut prompt = ScriptedPrompt::new(["love"]);

        let err = search_by_title(&mut catalog, &mut prompt, 10).unwrap_err();
        assert!(err.is_prompt());
    }
}
