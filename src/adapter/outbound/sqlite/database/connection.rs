//! Database connection management using Diesel ORM.
//!
//! The catalog is opened once per process over a single connection and
//! switched to read-only mode.

use std::path::Path;

use diesel::prelude::*;
use diesel::{ConnectionError, SqliteConnection};

use crate::error::{Error, Result};

const URL_SCHEME: &str = "sqlite://";
const IN_MEMORY: &str = ":memory:";

/// Strip an optional `sqlite://` prefix from a catalog target.
#[must_use]
pub fn database_path(target: &str) -> &str {
    target.strip_prefix(URL_SCHEME).unwrap_or(target)
}

/// Open the catalog at `target`.
///
/// SQLite would silently create a missing file, which would only surface
/// later as "no such table"; a missing file is reported here instead.
///
/// # Errors
/// Returns an error if the file is missing, cannot be opened, or the
/// connection cannot be configured.
pub fn establish(target: &str) -> Result<SqliteConnection> {
    let path = database_path(target);
    if path != IN_MEMORY && !Path::new(path).exists() {
        return Err(Error::Connection(ConnectionError::BadConnection(format!(
            "catalog database not found: {path}"
        ))));
    }

    let mut conn = SqliteConnection::establish(path)?;
    configure_sqlite_connection(&mut conn)?;
    Ok(conn)
}

/// Configure SQLite connection pragmas used for catalog reads.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000").execute(conn)?;
    diesel::sql_query("PRAGMA query_only=ON").execute(conn)?;
    Ok(())
}
