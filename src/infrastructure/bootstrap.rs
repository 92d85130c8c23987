//! Composition root: wires the adapters together and runs the session.

use tracing::{error, info};

use crate::adapter::inbound::cli::{output, Session, TerminalPrompt};
use crate::adapter::outbound::mongo::MongoRecordStore;
use crate::adapter::outbound::sqlite::SqliteCatalog;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::RecordStore;

/// Open the catalog behind a spinner.
fn connect_catalog(config: &Config) -> Result<SqliteCatalog> {
    let spinner = output::spinner("Connecting to the film catalog...");
    let result = config
        .catalog
        .target()
        .map_err(Into::into)
        .and_then(SqliteCatalog::open);

    match &result {
        Ok(_) => output::spinner_success(&spinner, "Connected to the film catalog"),
        Err(_) => output::spinner_fail(&spinner, "Could not connect to the film catalog"),
    }
    result
}

/// Run an interactive session with the configured stores.
///
/// Connection failures are reported and end the run; they are not
/// returned, as the program exits normally either way.
pub async fn run(config: Config) {
    output::header(env!("CARGO_PKG_VERSION"));

    let mut store = MongoRecordStore::new(config.mongo.clone());
    let catalog = match connect_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "catalog connection failed");
            output::error(&format!("Connection failed: {e}"));
            store.close().await;
            return;
        }
    };

    info!(catalog = catalog.target(), page_size = config.catalog.page_size, "session starting");
    Session::new(catalog, store, TerminalPrompt::new(), config.catalog.page_size)
        .run()
        .await;
}
