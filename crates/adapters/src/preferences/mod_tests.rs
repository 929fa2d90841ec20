// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use sentinel_core::LogicalElement;

use super::*;

#[test]
fn locator_override_key_is_per_element() {
    assert_ne!(
        locator_override_key(LogicalElement::MainInputField),
        locator_override_key(LogicalElement::StopGeneratingButton)
    );
}

#[tokio::test]
async fn default_locator_override_is_none_when_unset() {
    let store = FakePreferenceStore::new();
    assert_eq!(
        store.locator_override(LogicalElement::MainInputField).await,
        None
    );
}

#[tokio::test]
async fn malformed_blob_is_treated_as_absent() {
    let store = FakePreferenceStore::new();
    store
        .set_json(
            &locator_override_key(LogicalElement::MainInputField),
            serde_json::json!({"not": "a locator"}),
        )
        .await
        .unwrap();
    assert_eq!(
        store.locator_override(LogicalElement::MainInputField).await,
        None
    );
}
