//! Interactive terminal adapter.
//!
//! Drives the application from a menu loop: reads answers through the
//! [`Prompt`](crate::port::Prompt) port and renders results as tables.

pub mod output;
pub mod prompt;
pub mod search;
pub mod session;
pub mod stats;
pub mod table;

pub use prompt::TerminalPrompt;
pub use session::{MenuChoice, Session};
