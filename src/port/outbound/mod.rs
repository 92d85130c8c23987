//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two stores the application talks to: the
//! relational film catalog and the query history document store.

pub mod catalog;
pub mod records;
