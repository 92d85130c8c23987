//! MongoDB record store configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Where the query history lives.
///
/// Every field is optional at load time. Missing values are only reported
/// when the store is first used, so a search session can run without a
/// reachable history store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MongoSettings {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    #[serde(default)]
    pub url: Option<String>,
    /// Database name.
    #[serde(default)]
    pub database: Option<String>,
    /// Collection holding one document per search.
    #[serde(default)]
    pub collection: Option<String>,
}

/// Fully resolved connection target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MongoTarget<'a> {
    pub url: &'a str,
    pub database: &'a str,
    pub collection: &'a str,
}

impl MongoSettings {
    /// Resolve the connection target, rejecting missing or blank values.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingField`] naming the first absent value.
    pub fn target(&self) -> Result<MongoTarget<'_>, ConfigError> {
        Ok(MongoTarget {
            url: required(self.url.as_deref(), "MONGO_URL")?,
            database: required(self.database.as_deref(), "MONGO_DB")?,
            collection: required(self.collection.as_deref(), "MONGO_COLLECTION")?,
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField { field }),
    }
}
