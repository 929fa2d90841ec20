// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key/value preference store: booleans, integers, strings, and small JSON
//! blobs, keyed by string. User-override Locators live here, one JSON blob
//! per `LogicalElement`.

mod file;
mod noop;

pub use file::FileBackedPreferenceStore;
pub use noop::NoOpPreferenceStore;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePreferenceStore;

use async_trait::async_trait;
use sentinel_core::{Locator, LogicalElement};
use thiserror::Error;

/// Errors from preference-store operations.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("io error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serde(String),
}

/// The key a user-override Locator for `element` is stored under.
pub fn locator_override_key(element: LogicalElement) -> String {
    format!("locator_override:{element:?}")
}

#[async_trait]
pub trait PreferenceStore: Clone + Send + Sync + 'static {
    async fn get_bool(&self, key: &str) -> Option<bool>;
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), PreferenceError>;
    async fn get_int(&self, key: &str) -> Option<i64>;
    async fn set_int(&self, key: &str, value: i64) -> Result<(), PreferenceError>;
    async fn get_string(&self, key: &str) -> Option<String>;
    async fn set_string(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
    async fn get_json(&self, key: &str) -> Option<serde_json::Value>;
    async fn set_json(&self, key: &str, value: serde_json::Value) -> Result<(), PreferenceError>;

    /// Parse the user-override Locator for `element`, if present and
    /// well-formed. A malformed blob is treated as absent (the cascade
    /// simply falls through to the next step) rather than an error.
    async fn locator_override(&self, element: LogicalElement) -> Option<Locator> {
        let value = self.get_json(&locator_override_key(element)).await?;
        serde_json::from_value(value).ok()
    }

    /// Store a user-override Locator for `element`.
    async fn set_locator_override(
        &self,
        element: LogicalElement,
        locator: &Locator,
    ) -> Result<(), PreferenceError> {
        let value =
            serde_json::to_value(locator).map_err(|e| PreferenceError::Serde(e.to_string()))?;
        self.set_json(&locator_override_key(element), value).await
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
