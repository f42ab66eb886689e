use std::fs;

use lexique_config::Config;

use crate::profile::{create_profile, load_profile};

#[test]
fn first_run_creates_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings").join("lexique.json");

    let created = load_profile(&path).unwrap();
    assert!(path.exists());

    let reloaded = load_profile(&path).unwrap();
    assert_eq!(reloaded.store.document, created.store.document);
    assert_eq!(reloaded.anki.deck, created.anki.deck);
    assert_eq!(reloaded.timeout_seconds, created.timeout_seconds);
}

#[test]
fn partial_profile_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexique.json");
    fs::write(
        &path,
        r#"{ "name": "main", "value": { "store": { "document": "notes/vocab.tex" }, "timeout_seconds": 5 } }"#,
    )
    .unwrap();

    let config = load_profile(&path).unwrap();
    assert_eq!(config.store.document, "notes/vocab.tex");
    assert_eq!(config.store.exported, "exported_words.json");
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.anki.url, "http://localhost:8765");
}

#[test]
fn malformed_profile_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexique.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(load_profile(&path).is_err());
}

#[test]
fn api_key_is_not_written_to_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexique.json");

    let mut config = Config::default();
    config.generator.api_key = "sk-ant-secret".to_string();
    let created = create_profile(&path, config).unwrap();

    assert_eq!(created.generator.api_key, "sk-ant-secret");
    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("sk-ant-secret"));
    assert!(written.contains("\"api_key\": \"\""));
}
