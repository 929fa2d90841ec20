// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn all_contains_every_variant_once() {
    let mut seen = std::collections::HashSet::new();
    for e in LogicalElement::ALL {
        assert!(seen.insert(e), "{e:?} listed twice in ALL");
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn display_name_used_for_unrecoverable_wording() {
    assert_eq!(
        LogicalElement::ResumeConnectionButton.display_name(),
        "'Resume connection' button"
    );
}

#[test]
fn serde_round_trip() {
    let json = serde_json::to_string(&LogicalElement::SidebarActivityArea).unwrap();
    assert_eq!(json, "\"sidebar_activity_area\"");
    let back: LogicalElement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, LogicalElement::SidebarActivityArea);
}
