//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`prompt`] - `ScriptedPrompt`, a [`Prompt`](crate::port::Prompt) fed
//!   from a fixed list of answers.
//! - [`store`] - `MemoryRecordStore`, an in-memory
//!   [`RecordStore`](crate::port::RecordStore) with failure injection.
//! - [`catalog`] - Throwaway SQLite catalogs and `CountingCatalog`.

pub mod catalog;
pub mod prompt;
pub mod store;
