// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The entry type appended to the bounded Session Log. The ring-buffer
//! store itself lives in `sentinel-engine::session_log`, since it's a
//! runtime service rather than plain data.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Severity of a `SessionLogEntry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One entry in the Session Log, observable by the (out-of-scope) UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLogEntry {
    pub timestamp: SystemTime,
    pub level: LogLevel,
    pub message: String,
    pub pid: Option<u32>,
}

impl SessionLogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, pid: Option<u32>) -> Self {
        SessionLogEntry {
            timestamp: SystemTime::now(),
            level,
            message: message.into(),
            pid,
        }
    }
}

#[cfg(test)]
#[path = "session_log_tests.rs"]
mod tests;
