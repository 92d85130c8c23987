//! Application configuration loading and validation.
//!
//! Values come from an optional TOML file, then environment variables
//! override them. A `.env` file is loaded into the environment by `main`
//! before this runs.
//!
//! # Example
//!
//! ```no_run
//! use filmsearch::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("filmsearch.toml")?;
//!     config.init_logging()?;
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::Level;

use super::catalog::CatalogConfig;
use super::logging::LoggingConfig;
use crate::adapter::outbound::mongo::MongoSettings;
use crate::error::{ConfigError, Result};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "filmsearch.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Relational film catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Query history store. Validated on first use, not here.
    #[serde(default)]
    pub mongo: MongoSettings,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content without validating it.
    ///
    /// # Errors
    /// Returns an error if the TOML content is malformed.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Load configuration from `path` (if it exists) and the process
    /// environment.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, an override
    /// is malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading overrides through `lookup`.
    ///
    /// # Errors
    /// Same as [`Config::load`].
    pub fn load_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            Self::parse_toml(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides on top of file values.
    ///
    /// # Errors
    /// Returns an error if `CATALOG_PAGE_SIZE` is not an integer.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database) = lookup("CATALOG_DATABASE") {
            self.catalog.database = Some(database);
        }
        if let Some(raw) = lookup("CATALOG_PAGE_SIZE") {
            self.catalog.page_size =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        field: "CATALOG_PAGE_SIZE",
                        reason: format!("not an integer: {raw}"),
                    })?;
        }
        if let Some(url) = lookup("MONGO_URL") {
            self.mongo.url = Some(url);
        }
        if let Some(database) = lookup("MONGO_DB") {
            self.mongo.database = Some(database);
        }
        if let Some(collection) = lookup("MONGO_COLLECTION") {
            self.mongo.collection = Some(collection);
        }
        if let Some(file) = lookup("FILMSEARCH_LOG_FILE") {
            self.logging.file = PathBuf::from(file);
        }
        if let Some(level) = lookup("FILMSEARCH_LOG_LEVEL") {
            self.logging.level = level.trim().to_lowercase();
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// The record store settings are left to fail at first use.
    fn validate(&self) -> Result<()> {
        self.catalog.target()?;
        if self.catalog.page_size < 1 {
            return Err(ConfigError::InvalidValue {
                field: "CATALOG_PAGE_SIZE",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.logging.level.parse::<Level>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "FILMSEARCH_LOG_LEVEL",
                reason: format!("unknown level: {}", self.logging.level),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging from this configuration.
    ///
    /// # Errors
    /// Returns the log file open error; stderr logging is installed instead.
    pub fn init_logging(&self) -> std::io::Result<()> {
        self.logging.init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const MISSING: &str = "/nonexistent/filmsearch.toml";

    #[test]
    fn catalog_target_is_required() {
        let err = Config::load_with(MISSING, env(&[])).unwrap_err();
        assert_eq!(err.to_string(), "missing required field: CATALOG_DATABASE");
    }

    #[test]
    fn env_only_configuration() {
        let config = Config::load_with(
            MISSING,
            env(&[
                ("CATALOG_DATABASE", "films.db"),
                ("MONGO_URL", "mongodb://localhost:27017"),
                ("MONGO_DB", "films"),
                ("MONGO_COLLECTION", "queries"),
            ]),
        )
        .unwrap();
        assert_eq!(config.catalog.target().unwrap(), "films.db");
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.mongo.database.as_deref(), Some("films"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn mongo_settings_are_not_required_at_load() {
        let config = Config::load_with(MISSING, env(&[("CATALOG_DATABASE", "films.db")])).unwrap();
        assert!(config.mongo.target().is_err());
    }

    #[test]
    fn toml_values_are_overridden_by_env() {
        let mut config = Config::parse_toml(
            r#"
            [catalog]
            database = "from-file.db"
            page_size = 20

            [logging]
            level = "info"
            file = "film.log"
            "#,
        )
        .unwrap();
        config
            .apply_overrides(env(&[("CATALOG_DATABASE", "from-env.db")]))
            .unwrap();
        assert_eq!(config.catalog.target().unwrap(), "from-env.db");
        assert_eq!(config.catalog.page_size, 20);
        assert_eq!(config.logging.file, PathBuf::from("film.log"));
    }

    #[test]
    fn page_size_must_be_positive() {
        let err = Config::load_with(
            MISSING,
            env(&[("CATALOG_DATABASE", "films.db"), ("CATALOG_PAGE_SIZE", "0")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("CATALOG_PAGE_SIZE"));
    }

    #[test]
    fn page_size_must_be_numeric() {
        let err = Config::load_with(
            MISSING,
            env(&[("CATALOG_DATABASE", "films.db"), ("CATALOG_PAGE_SIZE", "ten")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = Config::load_with(
            MISSING,
            env(&[
                ("CATALOG_DATABASE", "films.db"),
                ("FILMSEARCH_LOG_LEVEL", "chatty"),
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("FILMSEARCH_LOG_LEVEL"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::parse_toml("[catalog\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
