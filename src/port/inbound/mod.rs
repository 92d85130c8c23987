//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`prompt`]: line-oriented user input for the interactive menu
//!   and search parameters

pub mod prompt;
