// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn exact_match_requires_equality() {
    let m = MatchValue::Exact("Resume".to_string());
    assert!(m.matches("Resume"));
    assert!(!m.matches("Resumed"));
}

#[test]
fn contains_match_is_substring() {
    let m = MatchValue::Contains("Generating".to_string());
    assert!(m.matches("Still Generating response..."));
    assert!(!m.matches("Idle"));
}

#[test]
fn locator_round_trips_through_json() {
    let loc = Locator::single(
        "role",
        MatchValue::Exact("button".to_string()),
        5,
    );
    let json = serde_json::to_string(&loc).unwrap();
    let back: Locator = serde_json::from_str(&json).unwrap();
    assert_eq!(loc, back);
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn exact_matches_iff_strings_are_equal(a in ".*", b in ".*") {
            let m = MatchValue::Exact(a.clone());
            prop_assert_eq!(m.matches(&b), a == b);
        }

        #[test]
        fn contains_matches_whenever_needle_is_a_substring(
            prefix in ".*", needle in "[a-zA-Z0-9]+", suffix in ".*",
        ) {
            let haystack = format!("{prefix}{needle}{suffix}");
            let m = MatchValue::Contains(needle);
            prop_assert!(m.matches(&haystack));
        }
    }
}
