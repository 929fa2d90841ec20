// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The accessibility driver boundary: the one external collaborator this
//! workspace treats as genuinely out of scope (the spec assumes it exposes
//! "query element by criteria" and "perform action on element"; building a
//! real macOS AX backend is explicitly not part of this core).

mod noop;

pub use noop::NoOpAxDriver;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{AxCall, FakeAxDriver};

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use sentinel_core::Locator;

/// An observed element's requested attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert("text".to_string(), text.into());
        Element { attributes }
    }

    pub fn text(&self) -> Option<&str> {
        self.attributes.get("text").map(String::as_str)
    }
}

/// Errors surfaced by the AX Driver boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AxError {
    #[error("AX call timed out")]
    Timeout,
    #[error("element not found")]
    NotFound,
    #[error("action rejected: {0}")]
    ActionRejected(String),
    #[error("AX driver error: {0}")]
    Other(String),
}

/// Narrow capability exposed by the host accessibility layer.
///
/// Both operations are expected to be side-effect-free with respect to the
/// core's own state; only `Instance` mutation in `sentinel-engine` changes
/// state as a result of a call here.
#[async_trait]
pub trait AxDriver: Clone + Send + Sync + 'static {
    /// Query the element tree of the process `pid` for the first element
    /// matching `locator`, within `locator.max_depth`, populating
    /// `attributes_wanted`.
    async fn query(
        &self,
        pid: u32,
        locator: &Locator,
        attributes_wanted: &[&str],
    ) -> Result<Option<Element>, AxError>;

    /// Perform a named action (`"press"`, `"raise"`, `"set_value"`, ...) on
    /// the first element matching `locator` in process `pid`.
    async fn perform(
        &self,
        pid: u32,
        locator: &Locator,
        action_name: &str,
        value: Option<&str>,
    ) -> Result<(), AxError>;

    /// Whether `attribute` can be set on an already-observed element.
    /// Consumed by the adjacent inspector feature, never by the core.
    async fn is_settable(&self, element: &Element, attribute: &str) -> bool {
        let _ = element;
        let _ = attribute;
        false
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
