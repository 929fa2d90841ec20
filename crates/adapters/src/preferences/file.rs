// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preference store backed by a single JSON file under the state directory,
//! written with the atomic write-then-rename idiom so a crash mid-write
//! never leaves a truncated file behind.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::{PreferenceError, PreferenceStore};

/// JSON-file-backed preference store. All reads hit the in-memory cache;
/// every write updates the cache and then persists the whole map to disk.
#[derive(Clone)]
pub struct FileBackedPreferenceStore {
    path: PathBuf,
    cache: Arc<Mutex<Map<String, Value>>>,
}

impl FileBackedPreferenceStore {
    /// Load `path` if it exists, or start from an empty map.
    pub async fn load(path: PathBuf) -> Result<Self, PreferenceError> {
        let map = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| PreferenceError::Serde(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(PreferenceError::Io(e.to_string())),
        };
        Ok(Self {
            path,
            cache: Arc::new(Mutex::new(map)),
        })
    }

    async fn persist(&self) -> Result<(), PreferenceError> {
        let snapshot = self.cache.lock().clone();
        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| PreferenceError::Serde(e.to_string()))?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|e| PreferenceError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| PreferenceError::Io(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FileBackedPreferenceStore {
    async fn get_bool(&self, key: &str) -> Option<bool> {
        self.cache.lock().get(key).and_then(Value::as_bool)
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.cache
            .lock()
            .insert(key.to_string(), Value::Bool(value));
        self.persist().await
    }

    async fn get_int(&self, key: &str) -> Option<i64> {
        self.cache.lock().get(key).and_then(Value::as_i64)
    }

    async fn set_int(&self, key: &str, value: i64) -> Result<(), PreferenceError> {
        self.cache
            .lock()
            .insert(key.to_string(), Value::Number(value.into()));
        self.persist().await
    }

    async fn get_string(&self, key: &str) -> Option<String> {
        self.cache
            .lock()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.cache
            .lock()
            .insert(key.to_string(), Value::String(value.to_string()));
        self.persist().await
    }

    async fn get_json(&self, key: &str) -> Option<Value> {
        self.cache.lock().get(key).cloned()
    }

    async fn set_json(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        self.cache.lock().insert(key.to_string(), value);
        self.persist().await
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
