//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed film catalog using Diesel ORM.

pub mod catalog;
pub mod database;

pub use catalog::SqliteCatalog;
