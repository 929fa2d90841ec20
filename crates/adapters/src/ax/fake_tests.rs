// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use super::*;

fn locator(tag: &str) -> Locator {
    let mut criteria = BTreeMap::new();
    criteria.insert("id".to_string(), sentinel_core::MatchValue::Exact(tag.to_string()));
    Locator {
        criteria,
        path_hint: None,
        max_depth: 3,
    }
}

#[tokio::test]
async fn query_returns_scripted_response() {
    let driver = FakeAxDriver::new();
    let loc = locator("resume");
    driver.set_query_result(loc.clone(), Some(Element::with_text("Resume")));
    let found = driver.query(1, &loc, &["text"]).await.unwrap();
    assert_eq!(found.unwrap().text(), Some("Resume"));
}

#[tokio::test]
async fn unscripted_query_returns_none() {
    let driver = FakeAxDriver::new();
    let loc = locator("unknown");
    assert_eq!(driver.query(1, &loc, &["text"]).await.unwrap(), None);
}

#[tokio::test]
async fn perform_defaults_to_not_found_and_records_calls() {
    let driver = FakeAxDriver::new();
    let loc = locator("resume");
    driver.set_perform_result(loc.clone(), Ok(()));
    driver.perform(7, &loc, "press", None).await.unwrap();
    assert_eq!(driver.perform_count(&loc), 1);
    assert_eq!(driver.calls().len(), 1);

    let other = locator("other");
    assert_eq!(
        driver.perform(7, &other, "press", None).await,
        Err(AxError::NotFound)
    );
}
