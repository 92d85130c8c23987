use filmsearch::adapter::inbound::cli::output;
use filmsearch::infrastructure::bootstrap;
use filmsearch::infrastructure::config::logging::LoggingConfig;
use filmsearch::infrastructure::config::settings::DEFAULT_CONFIG_FILE;
use filmsearch::infrastructure::config::Config;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::load(DEFAULT_CONFIG_FILE) {
        Ok(c) => c,
        Err(e) => {
            let _ = LoggingConfig::default().init();
            error!(error = %e, "failed to load config");
            output::error(&format!("Failed to load config: {e}"));
            return;
        }
    };

    if let Err(e) = config.init_logging() {
        output::warning(&format!(
            "Cannot write log file {}: {e}",
            config.logging.file.display()
        ));
        warn!(error = %e, "log file unavailable, logging to stderr");
    }
    info!("filmsearch starting");

    bootstrap::run(config).await;

    info!("filmsearch stopped");
}
