// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded, append-only ring of `SessionLogEntry`. Writes are serialized
//! behind a mutex; readers get an owned snapshot, never a reference into
//! live state.

use std::collections::VecDeque;

use parking_lot::Mutex;
use sentinel_core::{LogLevel, SessionLogEntry};

const DEFAULT_CAPACITY: usize = 1000;

/// FIFO-evicting append-only log, shared by clone across the Scheduler,
/// Executor, and the operator command surface.
#[derive(Clone)]
pub struct SessionLog {
    inner: std::sync::Arc<Mutex<VecDeque<SessionLogEntry>>>,
    capacity: usize,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SessionLog {
            inner: std::sync::Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append one entry, evicting the oldest if at capacity.
    pub fn record(&self, level: LogLevel, message: impl Into<String>, pid: Option<u32>) {
        let mut entries = self.inner.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(SessionLogEntry::new(level, message, pid));
    }

    /// A snapshot of every entry currently retained, oldest first.
    pub fn snapshot(&self) -> Vec<SessionLogEntry> {
        self.inner.lock().iter().cloned().collect()
    }

    /// Discard every retained entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_log_tests.rs"]
mod tests;
