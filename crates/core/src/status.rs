// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-instance status, surfaced to the (out-of-scope) UI layer as a single
//! human-readable line.

use serde::{Deserialize, Serialize};

/// The kind of recovery sub-protocol an intervention performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryKind {
    Connection,
    StopGenerating,
    Stuck,
    ForceStop,
}

impl std::fmt::Display for RecoveryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecoveryKind::Connection => "Connection",
            RecoveryKind::StopGenerating => "StopGenerating",
            RecoveryKind::Stuck => "Stuck",
            RecoveryKind::ForceStop => "ForceStop",
        };
        f.write_str(s)
    }
}

/// Structural per-instance status. Equality is structural; there is no
/// meaningful ordering between variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Status {
    Unknown,
    Working(String),
    Idle,
    Recovering(RecoveryKind, u32),
    Error(String),
    Unrecoverable(String),
    Paused(String),
}

impl Status {
    /// The one-line human-readable derivation described in the error
    /// handling design: `"Working (Generating) 🚀"`,
    /// `"Recovering (Connection attempt 2) 🛠️"`,
    /// `"Unrecoverable: 'Resume' button not found 🆘"`,
    /// `"Paused (Intervention Limit Reached) 🚫"`.
    pub fn display_string(&self) -> String {
        match self {
            Status::Unknown => "Unknown".to_string(),
            Status::Working(detail) => format!("Working ({detail}) 🚀"),
            Status::Idle => "Idle".to_string(),
            Status::Recovering(kind, attempt) => {
                format!("Recovering ({kind} attempt {attempt}) 🛠️")
            }
            Status::Error(reason) => format!("Error: {reason} ⚠️"),
            Status::Unrecoverable(reason) => format!("Unrecoverable: {reason} 🆘"),
            Status::Paused(reason) => format!("Paused ({reason}) 🚫"),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_string())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
