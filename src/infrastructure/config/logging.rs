//! Logging configuration and initialization.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level for this crate; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Append-only log file.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_level() -> String {
    "debug".into()
}

fn default_file() -> PathBuf {
    PathBuf::from("app.log")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: default_file(),
        }
    }
}

impl LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset.
    ///
    /// The MongoDB driver is held at `warn` regardless of the level.
    #[must_use]
    pub fn directives(&self) -> String {
        format!("{},mongodb=warn", self.level)
    }

    /// Initialize the tracing subscriber, writing to the log file.
    ///
    /// If the file cannot be opened, logs go to stderr instead and the
    /// open error is returned so the caller can report it.
    ///
    /// # Errors
    /// Returns the error from opening the log file.
    pub fn init(&self) -> io::Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()));

        match OpenOptions::new().create(true).append(true).open(&self.file) {
            Ok(file) => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
                Ok(())
            }
            Err(e) => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(io::stderr)
                    .try_init();
                Err(e)
            }
        }
    }
}
