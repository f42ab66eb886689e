use std::fs;

use lexique_anki::ExportedKeys;
use lexique_core::{Example, Record};

use super::scratch_state;
use crate::commands::export_deck::handle_export;

fn record(word: &str) -> Record {
    Record::new(
        word,
        "noun",
        vec![format!("meaning of {word}")],
        vec![Example::new(format!("Voici {word}."), "Here it is.")],
    )
}

#[tokio::test]
async fn exports_only_new_entries() {
    let (dir, mut state) = scratch_state(None);
    state.store.upsert(record("chat")).unwrap();

    let first = handle_export(&mut state, Some("Vocab".into()), false)
        .await
        .unwrap();
    assert_eq!(first, 2);

    let package = fs::read_to_string(dir.path().join("Vocab.txt")).unwrap();
    assert!(package.contains("#deck:Vocab\n"));
    assert!(package.contains("Chat\tnoun\t• meaning of chat"));
    assert!(package.contains("Agaçante\tadjective"));

    let saved = ExportedKeys::load(dir.path().join("exported_words.json")).unwrap();
    assert!(saved.contains("chat") && saved.contains("agaçante"));

    state.store.upsert(record("école")).unwrap();
    let second = handle_export(&mut state, Some("Vocab".into()), false)
        .await
        .unwrap();
    assert_eq!(second, 1);

    let package = fs::read_to_string(dir.path().join("Vocab.txt")).unwrap();
    let notes: Vec<&str> = package.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].starts_with("École\t"));
}

#[tokio::test]
async fn nothing_new_writes_nothing() {
    let (dir, mut state) = scratch_state(None);
    state
        .exported
        .record(["agacante".to_string()])
        .unwrap();

    let count = handle_export(&mut state, None, false).await.unwrap();
    assert_eq!(count, 0);
    let package = dir.path().join(format!("{}.txt", state.config.anki.deck));
    assert!(!package.exists());
}
