//! The interactive menu loop.

use std::ops::ControlFlow;

use tracing::{error, info, warn};

use super::{output, search, stats};
use crate::application::query_log;
use crate::domain::{GenreYearParams, SearchOutcome, SearchQuery};
use crate::error::Result;
use crate::port::{FilmCatalog, Prompt, RecordStore};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SearchByTitle,
    SearchByGenreAndYear,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::SearchByTitle,
        MenuChoice::SearchByGenreAndYear,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    /// Parse a menu answer; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::SearchByTitle),
            "2" => Some(Self::SearchByGenreAndYear),
            "3" => Some(Self::Statistics),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SearchByTitle => "1",
            Self::SearchByGenreAndYear => "2",
            Self::Statistics => "3",
            Self::Exit => "0",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SearchByTitle => "Search by title",
            Self::SearchByGenreAndYear => "Search by genre and year range",
            Self::Statistics => "Query statistics",
            Self::Exit => "Exit",
        }
    }
}

/// Kind of search a menu choice starts.
#[derive(Debug, Clone, Copy)]
enum SearchKind {
    Title,
    GenreAndYear,
}

impl SearchKind {
    /// What gets recorded when the search ends without parameters.
    fn abandoned(self) -> SearchQuery {
        match self {
            Self::Title => SearchQuery::Keyword { keyword: None },
            Self::GenreAndYear => SearchQuery::GenreYear(GenreYearParams::default()),
        }
    }
}

/// An interactive session over one catalog, one record store, and one
/// input source.
pub struct Session<C, S, P> {
    catalog: C,
    store: S,
    prompt: P,
    page_size: i64,
}

impl<C, S, P> Session<C, S, P>
where
    C: FilmCatalog,
    S: RecordStore,
    P: Prompt,
{
    pub fn new(catalog: C, store: S, prompt: P, page_size: i64) -> Self {
        Self {
            catalog,
            store,
            prompt,
            page_size,
        }
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// Closes the record store and releases the catalog on return.
    pub async fn run(mut self) {
        println!("Welcome to the film search!");

        loop {
            print_menu();
            let answer = match self.prompt.ask("Choose an option and press Enter") {
                Ok(answer) => answer,
                Err(e) => {
                    info!(error = %e, "input closed, leaving menu");
                    break;
                }
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::SearchByTitle) => self.search(SearchKind::Title).await,
                Some(MenuChoice::SearchByGenreAndYear) => {
                    self.search(SearchKind::GenreAndYear).await
                }
                Some(MenuChoice::Statistics) => {
                    stats::show_stats(&mut self.store).await;
                    ControlFlow::Continue(())
                }
                Some(MenuChoice::Exit) => {
                    output::success("Goodbye!");
                    ControlFlow::Break(())
                }
                None => {
                    output::error("Invalid choice. Please try again.");
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        self.store.close().await;
        info!("session finished");
    }

    /// Run one search and record it, whatever the outcome.
    async fn search(&mut self, kind: SearchKind) -> ControlFlow<()> {
        let result = self.run_search(kind);

        let mut flow = ControlFlow::Continue(());
        let (query, total) = match result {
            Ok(outcome) => {
                let total = outcome.total();
                let query = match outcome {
                    SearchOutcome::Found { query, .. } => query,
                    SearchOutcome::Rejected(reason) => {
                        warn!(%reason, "search recorded without parameters");
                        kind.abandoned()
                    }
                };
                (query, total)
            }
            Err(e) => {
                if e.is_prompt() {
                    flow = ControlFlow::Break(());
                } else {
                    output::error("The search could not be completed.");
                }
                error!(error = %e, ?kind, "search failed");
                (kind.abandoned(), 0)
            }
        };

        query_log::log_search(&mut self.store, query, total).await;
        flow
    }

    fn run_search(&mut self, kind: SearchKind) -> Result<SearchOutcome> {
        match kind {
            SearchKind::Title => {
                search::search_by_title(&mut self.catalog, &mut self.prompt, self.page_size)
            }
            SearchKind::GenreAndYear => {
                search::search_by_genre_and_year(&mut self.catalog, &mut self.prompt, self.page_size)
            }
        }
    }
}

fn print_menu() {
    output::section("Menu");
    for choice in MenuChoice::ALL {
        println!("  {}  {}", output::highlight(choice.key()), choice.label());
    }
}
