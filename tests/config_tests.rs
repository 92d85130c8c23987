//! Configuration file loading.

use std::fs;

use filmsearch::infrastructure::config::Config;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn loads_every_section_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filmsearch.toml");
    fs::write(
        &path,
        r#"
        [catalog]
        database = "sqlite://films.db"
        page_size = 5

        [mongo]
        url = "mongodb://localhost:27017"
        database = "films"
        collection = "queries"

        [logging]
        level = "warn"
        file = "film.log"
        "#,
    )
    .unwrap();

    let config = Config::load_with(&path, no_env).unwrap();
    assert_eq!(config.catalog.target().unwrap(), "sqlite://films.db");
    assert_eq!(config.catalog.page_size, 5);
    let target = config.mongo.target().unwrap();
    assert_eq!(target.collection, "queries");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn missing_file_falls_back_to_environment() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_with(dir.path().join("absent.toml"), |key| {
        (key == "CATALOG_DATABASE").then(|| "films.db".to_string())
    })
    .unwrap();
    assert_eq!(config.catalog.target().unwrap(), "films.db");
    assert_eq!(config.logging.file.to_str(), Some("app.log"));
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filmsearch.toml");
    fs::write(&path, "catalog = [").unwrap();

    let err = Config::load_with(&path, no_env).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn blank_catalog_target_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filmsearch.toml");
    fs::write(&path, "[catalog]\ndatabase = \"  \"\n").unwrap();

    let err = Config::load_with(&path, no_env).unwrap_err();
    assert_eq!(err.to_string(), "missing required field: CATALOG_DATABASE");
}
