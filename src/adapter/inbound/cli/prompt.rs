//! Terminal implementation of the prompt port.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{Error, Result};
use crate::port::Prompt;

/// Reads answers from the terminal.
///
/// Uses a themed `dialoguer` input on a TTY and falls back to plain line
/// reads when stdin is piped. End of input is reported as an error.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
    interactive: bool,
}

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_line(message: &str) -> Result<String> {
        print!("{message}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(Error::Prompt("end of input".into()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        if !self.interactive {
            return Self::read_line(message);
        }

        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
