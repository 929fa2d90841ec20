// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory preference store for testing.
#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::{PreferenceError, PreferenceStore};

#[derive(Clone, Default)]
pub struct FakePreferenceStore {
    values: Arc<Mutex<HashMap<String, Value>>>,
}

impl FakePreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for FakePreferenceStore {
    async fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.lock().get(key).and_then(Value::as_bool)
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.values
            .lock()
            .insert(key.to_string(), Value::Bool(value));
        Ok(())
    }

    async fn get_int(&self, key: &str) -> Option<i64> {
        self.values.lock().get(key).and_then(Value::as_i64)
    }

    async fn set_int(&self, key: &str, value: i64) -> Result<(), PreferenceError> {
        self.values
            .lock()
            .insert(key.to_string(), Value::Number(value.into()));
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .lock()
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    async fn get_json(&self, key: &str) -> Option<Value> {
        self.values.lock().get(key).cloned()
    }

    async fn set_json(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        self.values.lock().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
