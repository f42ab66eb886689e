use std::fs;
use std::time::Duration;

use lexique_core::{AddOutcome, DuplicateAction, normalize};

use super::{CHAT, CannedGenerator, scratch_state};
use crate::commands::add_word::handle_add_word;

#[tokio::test]
async fn generated_entry_is_stored_in_order() {
    let generator = CannedGenerator::new(CHAT);
    let (_dir, mut state) = scratch_state(Some(generator.clone()));

    let outcome = handle_add_word(&mut state, "  chat ", DuplicateAction::Skip, false)
        .await
        .unwrap();
    assert_eq!(outcome, AddOutcome::Inserted);
    assert_eq!(generator.calls(), 1);

    let chat = state.store.get("Chat").unwrap();
    assert_eq!(chat.word_type, "noun");
    assert_eq!(chat.definitions.len(), 2);
    assert_eq!(chat.examples[1].translation, "My cat likes fish.");

    let keys: Vec<String> = state
        .store
        .records()
        .iter()
        .map(|r| normalize(&r.headword))
        .collect();
    assert_eq!(keys, vec!["agacante", "chat"]);
    assert_eq!(state.store.count().unwrap(), 2);
}

#[tokio::test]
async fn skip_and_view_make_no_request() {
    let generator = CannedGenerator::new(CHAT);
    let (_dir, mut state) = scratch_state(Some(generator.clone()));
    let before = fs::read_to_string(state.store.path()).unwrap();

    let skipped = handle_add_word(&mut state, "agacante", DuplicateAction::Skip, false)
        .await
        .unwrap();
    assert_eq!(
        skipped,
        AddOutcome::Skipped {
            existing: "Agaçante".to_string()
        }
    );

    let viewed = handle_add_word(&mut state, "AGAÇANTE", DuplicateAction::View, false)
        .await
        .unwrap();
    assert!(matches!(viewed, AddOutcome::Viewed(ref r) if r.word_type == "adjective"));

    assert_eq!(generator.calls(), 0);
    assert_eq!(fs::read_to_string(state.store.path()).unwrap(), before);
}

#[tokio::test]
async fn force_regenerates_existing_entry() {
    let reply = "Word Type: adjective
Definitions:
a. Irritating
Examples:
1. Une voix agaçante.
An irritating voice.
";
    let generator = CannedGenerator::new(reply);
    let (_dir, mut state) = scratch_state(Some(generator.clone()));

    let outcome = handle_add_word(&mut state, "agaçante", DuplicateAction::Force, false)
        .await
        .unwrap();
    assert!(matches!(outcome, AddOutcome::Replaced { ref previous } if previous.definitions.len() == 3));
    assert_eq!(generator.calls(), 1);
    assert_eq!(state.store.count().unwrap(), 1);
    assert_eq!(
        state.store.get("agacante").unwrap().definitions,
        vec!["Irritating"]
    );
}

#[tokio::test]
async fn spelling_correction_needs_consent() {
    let (_dir, mut state) = scratch_state(Some(CannedGenerator::new(CHAT)));
    handle_add_word(&mut state, "chatt", DuplicateAction::Skip, false)
        .await
        .unwrap();
    assert!(state.store.get("chatt").is_some());
    assert!(state.store.get("chat").is_none());

    let (_dir, mut state) = scratch_state(Some(CannedGenerator::new(CHAT)));
    handle_add_word(&mut state, "chatt", DuplicateAction::Skip, true)
        .await
        .unwrap();
    assert_eq!(state.store.get("chat").unwrap().headword, "Chat");
    assert!(state.store.get("chatt").is_none());
}

#[tokio::test]
async fn rejected_input_makes_no_request() {
    let generator = CannedGenerator::new(CHAT);
    let (_dir, mut state) = scratch_state(Some(generator.clone()));

    assert!(
        handle_add_word(&mut state, "   ", DuplicateAction::Skip, false)
            .await
            .is_err()
    );
    let long = "un deux trois quatre cinq six sept huit neuf dix onze";
    assert!(
        handle_add_word(&mut state, long, DuplicateAction::Skip, false)
            .await
            .is_err()
    );
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn unusable_reply_leaves_document_alone() {
    let (_dir, mut state) = scratch_state(Some(CannedGenerator::new("Sorry, I cannot help.")));
    let before = fs::read_to_string(state.store.path()).unwrap();

    let err = handle_add_word(&mut state, "chat", DuplicateAction::Skip, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no definitions"));
    assert_eq!(fs::read_to_string(state.store.path()).unwrap(), before);
}

#[tokio::test]
async fn missing_generator_is_reported() {
    let (_dir, mut state) = scratch_state(None);
    let err = handle_add_word(&mut state, "chat", DuplicateAction::Skip, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("No generator available"));
}

#[tokio::test]
async fn slow_generator_times_out() {
    let generator = CannedGenerator::slow(Duration::from_secs(30));
    let (_dir, mut state) = scratch_state(Some(generator.clone()));
    state.config.timeout_seconds = 0;

    let err = handle_add_word(&mut state, "chat", DuplicateAction::Skip, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("timed out"));
    assert!(state.store.get("chat").is_none());
}
