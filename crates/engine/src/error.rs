// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime.

use sentinel_adapters::AxError;
use sentinel_adapters::preferences::PreferenceError;
use sentinel_core::LogicalElement;
use thiserror::Error;

/// Errors that can occur resolving or acting on a locator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocatorResolutionError {
    #[error("{0} not found")]
    NotFound(LogicalElement),
}

/// Errors surfaced by the engine runtime.
///
/// The tick loop itself never returns one of these: `Supervisor::process_instance`
/// absorbs every fallible step internally and turns it into a `Status`
/// transition plus a session log entry. This enum exists for the daemon's
/// command surface, where an operator-triggered action (a manual nudge, a
/// preference write) needs a single error type to report back over the
/// socket.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("ax error: {0}")]
    Ax(#[from] AxError),
    #[error("preference store error: {0}")]
    Preference(#[from] PreferenceError),
    #[error("locator resolution error: {0}")]
    LocatorResolution(#[from] LocatorResolutionError),
    #[error("instance not found: {0}")]
    InstanceNotFound(u32),
}
