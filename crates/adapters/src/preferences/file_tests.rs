// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use sentinel_core::{Locator, MatchValue};

use super::*;

#[tokio::test]
async fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBackedPreferenceStore::load(dir.path().join("prefs.json"))
        .await
        .unwrap();
    assert_eq!(store.get_bool("x").await, None);
}

#[tokio::test]
async fn set_then_get_round_trips_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let store = FileBackedPreferenceStore::load(path.clone()).await.unwrap();
    store.set_bool("sound_on_intervention", false).await.unwrap();
    store.set_string("nudge_text", "keep going").await.unwrap();
    store.set_int("max_interventions_per_positive", 4).await.unwrap();

    let reloaded = FileBackedPreferenceStore::load(path).await.unwrap();
    assert_eq!(reloaded.get_bool("sound_on_intervention").await, Some(false));
    assert_eq!(
        reloaded.get_string("nudge_text").await,
        Some("keep going".to_string())
    );
    assert_eq!(reloaded.get_int("max_interventions_per_positive").await, Some(4));
}

#[tokio::test]
async fn missing_int_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBackedPreferenceStore::load(dir.path().join("prefs.json"))
        .await
        .unwrap();
    assert_eq!(store.get_int("x").await, None);
}

#[tokio::test]
async fn locator_override_round_trips_as_one_json_blob_per_element() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBackedPreferenceStore::load(dir.path().join("prefs.json"))
        .await
        .unwrap();
    let locator = Locator::single(
        "role",
        MatchValue::Exact("button".to_string()),
        4,
    );
    store
        .set_locator_override(sentinel_core::LogicalElement::ResumeConnectionButton, &locator)
        .await
        .unwrap();

    let back = store
        .locator_override(sentinel_core::LogicalElement::ResumeConnectionButton)
        .await;
    assert_eq!(back, Some(locator));
    assert_eq!(
        store
            .locator_override(sentinel_core::LogicalElement::ForceStopResumeLink)
            .await,
        None
    );
}
