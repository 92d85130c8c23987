//! Film catalog configuration.

use serde::Deserialize;

use crate::domain::film::DEFAULT_PAGE_SIZE;
use crate::error::ConfigError;

/// Where the film catalog lives and how it is paged.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// SQLite database path or `sqlite://` URL.
    #[serde(default)]
    pub database: Option<String>,

    /// Rows per result page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// The catalog connection target.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingField`] when no target is set.
    pub fn target(&self) -> Result<&str, ConfigError> {
        match self.database.as_deref().map(str::trim) {
            Some(target) if !target.is_empty() => Ok(target),
            _ => Err(ConfigError::MissingField {
                field: "CATALOG_DATABASE",
            }),
        }
    }
}
