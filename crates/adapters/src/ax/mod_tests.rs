// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn element_with_text_round_trips() {
    let el = Element::with_text("Generating response...");
    assert_eq!(el.text(), Some("Generating response..."));
}

#[tokio::test]
async fn default_is_settable_is_false() {
    let driver = NoOpAxDriver::new();
    let el = Element::with_text("x");
    assert!(!driver.is_settable(&el, "value").await);
}
