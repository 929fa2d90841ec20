// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;
use std::time::Duration;

use crate::lifecycle::DaemonError;

/// Resolve state directory: SENTINEL_STATE_DIR > XDG_STATE_HOME/sentineld >
/// ~/.local/state/sentineld
pub fn state_dir() -> Result<PathBuf, DaemonError> {
    if let Ok(dir) = std::env::var("SENTINEL_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("sentineld"));
    }
    let home = std::env::var("HOME").map_err(|_| DaemonError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/sentineld"))
}

/// Name of the OS process to watch, matched against the process table.
/// Overridable since the target IDE's process name is a deployment detail,
/// not something the supervision core should hard-code.
pub fn target_process_name() -> String {
    std::env::var("SENTINEL_TARGET_PROCESS").unwrap_or_else(|_| "TargetIDE".to_string())
}

/// Process-table poll interval override.
pub fn process_poll_ms() -> Option<Duration> {
    std::env::var("SENTINEL_PROCESS_POLL_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}
