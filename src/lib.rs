//! Filmsearch - interactive film catalog search with a query history.
//!
//! Searches a relational film catalog by title keyword or by genre and
//! release-year range, pages through the results as colored tables, and
//! records every search in a document store. The history feeds a
//! statistics view with the most frequent and the most recent queries.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Search parameters, validation, history records, and the
//!   top/last query statistics
//! - **`port`** - Traits at the seams: prompt input, film catalog, record store
//! - **`adapter`** - Terminal menu (inbound), SQLite catalog and MongoDB
//!   history store (outbound)
//! - **`application`** - Best-effort query logging and history reads
//! - **`infrastructure`** - Configuration, logging, and wiring
//!
//! # Modules
//!
//! - [`domain`] - Store-agnostic types and statistics
//! - [`error`] - Error types for the crate
//! - [`port`] - Port traits
//! - [`adapter`] - Port implementations
//! - [`application`] - Use cases over the ports
//! - [`infrastructure`] - Configuration and bootstrap
//!
//! # Features
//!
//! - `testkit` - Test doubles and throwaway catalogs for integration tests
//!
//! # Example
//!
//! ```
//! use filmsearch::domain::stats::top_queries;
//! use filmsearch::domain::{QueryRecord, SearchQuery};
//!
//! let history = vec![
//!     QueryRecord::now(SearchQuery::keyword("love"), 3),
//!     QueryRecord::now(SearchQuery::keyword("love"), 3),
//!     QueryRecord::now(SearchQuery::keyword("war"), 1),
//! ];
//! let top = top_queries(&history);
//! assert_eq!(top[0].text, "love");
//! assert_eq!(top[0].count, 2);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
