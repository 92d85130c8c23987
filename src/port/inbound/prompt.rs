//! User input port.

use crate::error::Result;

/// Source of free-text answers to interactive prompts.
///
/// Implementations return the raw line without interpretation; trimming
/// and validation belong to the caller. An `Err` means no further input
/// can be read and the session should end.
pub trait Prompt {
    /// Show `message` and read one line of input.
    fn ask(&mut self, message: &str) -> Result<String>;
}
