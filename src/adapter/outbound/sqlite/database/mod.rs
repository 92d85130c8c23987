//! SQLite database modules.
//!
//! Provides connection setup, table definitions, and Diesel model types
//! for the film catalog.

pub mod connection;
pub mod model;
pub mod schema;
