// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects represent the side effects the Intervention Executor needs to
//! perform, modeled as data rather than called directly so they can be
//! logged, tested, and dispatched uniformly.

use serde::{Deserialize, Serialize};

use crate::locator::Locator;
use crate::logical_element::LogicalElement;
use crate::status::RecoveryKind;

/// A single AX action: press a button, focus+set a field's value, or query
/// an element (queries are also modeled as effects so the Executor's whole
/// sub-protocol, not just its mutating half, goes through one dispatch
/// path and one log).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Press the first element matching `locator`.
    Press {
        element: LogicalElement,
        locator: Locator,
    },
    /// Focus the first element matching `locator`, then set its value.
    SetValue {
        element: LogicalElement,
        locator: Locator,
        value: String,
    },
    /// Record a `PendingObservation` for the instance after a successful
    /// intervention sub-step.
    RecordPendingObservation { pid: u32, recovery_kind: RecoveryKind },
    /// Append an entry to the bounded Session Log.
    LogSessionEntry {
        pid: Option<u32>,
        level: crate::session_log::LogLevel,
        message: String,
    },
    /// Play a short feedback sound, if a sound player is configured.
    PlaySound { name: String },
    /// Ask the icon controller for a brief "flash" animation.
    FlashIcon,
    /// Post a desktop notification. Gated by config; used only on
    /// `Unrecoverable` transitions and the intervention-limit pause.
    Notify { title: String, message: String },
    /// Persist a resolved, proven-working locator into the session cache.
    CacheLocator {
        element: LogicalElement,
        pid: u32,
        locator: Locator,
    },
}

impl Effect {
    /// Effect name for tracing span names.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Press { .. } => "press",
            Effect::SetValue { .. } => "set_value",
            Effect::RecordPendingObservation { .. } => "record_pending_observation",
            Effect::LogSessionEntry { .. } => "log_session_entry",
            Effect::PlaySound { .. } => "play_sound",
            Effect::FlashIcon => "flash_icon",
            Effect::Notify { .. } => "notify",
            Effect::CacheLocator { .. } => "cache_locator",
        }
    }

    /// Key-value pairs for structured logging.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Press { element, .. } => vec![("element", element.to_string())],
            Effect::SetValue { element, value, .. } => vec![
                ("element", element.to_string()),
                ("value_len", value.len().to_string()),
            ],
            Effect::RecordPendingObservation { pid, recovery_kind } => vec![
                ("pid", pid.to_string()),
                ("recovery_kind", recovery_kind.to_string()),
            ],
            Effect::LogSessionEntry { pid, level, .. } => vec![
                ("pid", pid.map(|p| p.to_string()).unwrap_or_default()),
                ("level", format!("{level:?}")),
            ],
            Effect::PlaySound { name } => vec![("name", name.clone())],
            Effect::FlashIcon => vec![],
            Effect::Notify { title, .. } => vec![("title", title.clone())],
            Effect::CacheLocator { element, pid, .. } => {
                vec![("element", element.to_string()), ("pid", pid.to_string())]
            }
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
