// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op preference store: every read is absent, every write is discarded.
//! Useful before the real state directory is known (very early startup).

use async_trait::async_trait;

use super::{PreferenceError, PreferenceStore};

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPreferenceStore;

impl NoOpPreferenceStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PreferenceStore for NoOpPreferenceStore {
    async fn get_bool(&self, _key: &str) -> Option<bool> {
        None
    }

    async fn set_bool(&self, _key: &str, _value: bool) -> Result<(), PreferenceError> {
        Ok(())
    }

    async fn get_int(&self, _key: &str) -> Option<i64> {
        None
    }

    async fn set_int(&self, _key: &str, _value: i64) -> Result<(), PreferenceError> {
        Ok(())
    }

    async fn get_string(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set_string(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Ok(())
    }

    async fn get_json(&self, _key: &str) -> Option<serde_json::Value> {
        None
    }

    async fn set_json(&self, _key: &str, _value: serde_json::Value) -> Result<(), PreferenceError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
