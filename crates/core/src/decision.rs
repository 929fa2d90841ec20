// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Classifier's output: exactly one `Decision` per instance per tick.

use crate::status::RecoveryKind;

/// What the Classifier concluded an instance needs this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Nothing to do; the instance's surfaced status is left as-is by the
    /// caller (already `Unrecoverable`/`Paused`) or becomes `Idle`.
    NoOp,
    /// First or changed sidebar fingerprint observed; resets counters.
    NoteSidebarActivity(u64),
    /// A recognized working indicator or a sidebar change was observed.
    MarkPositive(String),
    /// Run the named recovery sub-protocol.
    Intervene(RecoveryKind),
    /// Enter `Paused(reason)`; budget exhausted, not a terminal state.
    EnterParameterizedPause(String),
    /// Enter `Unrecoverable(reason)`; terminal until an operator clears it.
    EnterUnrecoverable(String),
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod tests;
