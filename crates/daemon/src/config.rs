// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration: on-disk paths, and loading the per-tick
//! `SupervisorConfig` snapshot from a TOML file over documented defaults.

use std::path::PathBuf;

use sentinel_core::SupervisorConfig;

use crate::lifecycle::DaemonError;

/// Daemon configuration: fixed paths under the state directory, plus the
/// target process name. One daemon instance supervises one target process
/// family.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root state directory (e.g. ~/.local/state/sentineld).
    pub state_dir: PathBuf,
    /// Path to the Unix domain socket the operator command surface listens on.
    pub socket_path: PathBuf,
    /// Path to the exclusive lock/PID file.
    pub lock_path: PathBuf,
    /// Path to the daemon's own log file.
    pub log_path: PathBuf,
    /// Path to the `SupervisorConfig` TOML file.
    pub supervisor_config_path: PathBuf,
    /// Path to the preference-store JSON file.
    pub preferences_path: PathBuf,
    /// OS process name to watch.
    pub target_process_name: String,
}

impl Config {
    /// Load configuration for the user-level daemon.
    ///
    /// Uses fixed paths under `~/.local/state/sentineld/` (or
    /// `$XDG_STATE_HOME/sentineld/`). One daemon serves one target process
    /// family for a user.
    pub fn load() -> Result<Self, DaemonError> {
        let state_dir = crate::env::state_dir()?;

        Ok(Self {
            socket_path: state_dir.join("daemon.sock"),
            lock_path: state_dir.join("daemon.pid"),
            log_path: state_dir.join("daemon.log"),
            supervisor_config_path: state_dir.join("config.toml"),
            preferences_path: state_dir.join("preferences.json"),
            target_process_name: crate::env::target_process_name(),
            state_dir,
        })
    }

    /// Load the `SupervisorConfig` snapshot from `supervisor_config_path`,
    /// falling back to documented defaults for any field the file omits and
    /// to the full default when the file doesn't exist yet.
    pub async fn load_supervisor_config(&self) -> Result<SupervisorConfig, DaemonError> {
        let contents = match tokio::fs::read_to_string(&self.supervisor_config_path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SupervisorConfig::default());
            }
            Err(e) => return Err(DaemonError::Io(e)),
        };
        toml::from_str(&contents).map_err(DaemonError::ConfigParse)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
