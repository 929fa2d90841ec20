// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake AX driver for testing: scriptable query/perform responses keyed by
//! locator equality, plus a full call log.
#![cfg_attr(coverage_nightly, coverage(off))]

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use sentinel_core::Locator;

use super::{AxDriver, AxError, Element};

/// One recorded call against the fake driver.
#[derive(Debug, Clone, PartialEq)]
pub enum AxCall {
    Query { pid: u32, locator: Locator },
    Perform {
        pid: u32,
        locator: Locator,
        action_name: String,
        value: Option<String>,
    },
}

#[derive(Default)]
struct FakeState {
    query_responses: Vec<(Locator, Option<Element>)>,
    perform_results: Vec<(Locator, Result<(), AxError>)>,
    calls: Vec<AxCall>,
}

/// Fake AX driver for unit tests: responses are scripted per-locator, every
/// call is recorded so sub-protocol ordering can be asserted.
#[derive(Clone, Default)]
pub struct FakeAxDriver {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeAxDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response to `query` for a given locator.
    pub fn set_query_result(&self, locator: Locator, result: Option<Element>) {
        self.inner.lock().query_responses.push((locator, result));
    }

    /// Script the response to `perform` for a given locator.
    pub fn set_perform_result(&self, locator: Locator, result: Result<(), AxError>) {
        self.inner.lock().perform_results.push((locator, result));
    }

    /// All calls in the order they arrived.
    pub fn calls(&self) -> Vec<AxCall> {
        self.inner.lock().calls.clone()
    }

    /// How many times `perform` was called against `locator`.
    pub fn perform_count(&self, locator: &Locator) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, AxCall::Perform { locator: l, .. } if l == locator))
            .count()
    }
}

#[async_trait]
impl AxDriver for FakeAxDriver {
    async fn query(
        &self,
        pid: u32,
        locator: &Locator,
        _attributes_wanted: &[&str],
    ) -> Result<Option<Element>, AxError> {
        let mut state = self.inner.lock();
        state.calls.push(AxCall::Query {
            pid,
            locator: locator.clone(),
        });
        Ok(state
            .query_responses
            .iter()
            .find(|(l, _)| l == locator)
            .and_then(|(_, r)| r.clone()))
    }

    async fn perform(
        &self,
        pid: u32,
        locator: &Locator,
        action_name: &str,
        value: Option<&str>,
    ) -> Result<(), AxError> {
        let mut state = self.inner.lock();
        state.calls.push(AxCall::Perform {
            pid,
            locator: locator.clone(),
            action_name: action_name.to_string(),
            value: value.map(str::to_string),
        });
        match state.perform_results.iter().find(|(l, _)| l == locator) {
            Some((_, Ok(()))) => Ok(()),
            Some((_, Err(e))) => Err(e.clone()),
            None => Err(AxError::NotFound),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
