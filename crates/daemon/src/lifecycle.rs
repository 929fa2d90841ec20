// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup, shutdown.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use fs2::FileExt;
use sentinel_adapters::{
    DesktopNotifyAdapter, FileBackedPreferenceStore, NoOpAxDriver, PreferenceError,
    SysinfoProcessEvents, TracedAx,
};
use sentinel_core::SystemClock;
use sentinel_engine::Supervisor;
use thiserror::Error;
use tokio::net::UnixListener;
use tracing::{info, warn};

use crate::config::Config;

/// Daemon supervisor with concrete adapter types. The AX driver is a
/// no-op wrapped for tracing: a real accessibility backend is an external
/// collaborator this crate doesn't implement, so every instance reliably
/// surfaces as `Unrecoverable` rather than silently doing nothing.
pub type DaemonSupervisor =
    Supervisor<TracedAx<NoOpAxDriver>, DesktopNotifyAdapter, FileBackedPreferenceStore, SystemClock>;

/// Daemon state during operation.
///
/// The listener and process-event source are returned separately from
/// startup so `main` can spawn them as independent tasks.
pub struct DaemonState {
    pub config: Config,
    // Held to maintain the exclusive file lock; released on drop.
    #[allow(dead_code)]
    lock_file: File,
    pub supervisor: DaemonSupervisor,
    pub start_time: Instant,
}

/// Result of daemon startup: the daemon state plus everything that needs
/// to be spawned as a background task.
pub struct StartupResult {
    pub daemon: DaemonState,
    pub listener: UnixListener,
    pub process_events: SysinfoProcessEvents,
}

impl DaemonState {
    /// Shut down gracefully: remove the socket and lock files. The
    /// supervisor's preference store has already persisted every write by
    /// the time this runs (writes are synchronous-on-commit), so there's
    /// no final flush step.
    pub fn shutdown(&self) -> Result<(), DaemonError> {
        info!("shutting down daemon");

        if self.config.socket_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.config.socket_path) {
                warn!("failed to remove socket file: {}", e);
            }
        }
        if self.config.lock_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.config.lock_path) {
                warn!("failed to remove lock file: {}", e);
            }
        }

        info!("daemon shutdown complete");
        Ok(())
    }
}

/// Daemon-level errors: everything that can go wrong before the engine
/// itself takes over.
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("could not determine state directory")]
    NoStateDir,

    #[error("failed to acquire lock: daemon already running?")]
    LockFailed(#[source] std::io::Error),

    #[error("failed to bind socket at {0}: {1}")]
    BindFailed(PathBuf, std::io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("preference store error: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the daemon: acquire the lock, load persisted config and
/// preferences, wire up adapters, and bind the socket last.
pub async fn startup(config: &Config) -> Result<StartupResult, DaemonError> {
    match startup_inner(config).await {
        Ok(result) => Ok(result),
        Err(e) => {
            // Don't clean up on a lock failure: those files belong to the
            // already-running daemon.
            if !matches!(e, DaemonError::LockFailed(_)) {
                cleanup_on_failure(config);
            }
            Err(e)
        }
    }
}

async fn startup_inner(config: &Config) -> Result<StartupResult, DaemonError> {
    // 1. Create the state directory.
    std::fs::create_dir_all(&config.state_dir)?;

    // 2. Acquire the lock file first, before anything else touches disk,
    // to prevent two daemons racing over the same state directory. Avoid
    // truncating before the lock is held so we don't wipe a running
    // daemon's PID.
    let lock_file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&config.lock_path)?;
    lock_file
        .try_lock_exclusive()
        .map_err(DaemonError::LockFailed)?;

    use std::io::Write;
    let mut lock_file = lock_file;
    lock_file.set_len(0)?;
    writeln!(lock_file, "{}", std::process::id())?;
    let lock_file = lock_file;

    // 3. Load persisted supervisor config and preferences.
    let supervisor_config = config.load_supervisor_config().await?;
    let preferences = FileBackedPreferenceStore::load(config.preferences_path.clone()).await?;

    // 4. Wire adapters into a Supervisor.
    let ax = TracedAx::new(NoOpAxDriver::new());
    let notify = DesktopNotifyAdapter::new();
    let supervisor = Supervisor::new(ax, notify, preferences, SystemClock, supervisor_config);

    // 5. Start watching the target process family.
    let poll_interval = crate::env::process_poll_ms().unwrap_or(std::time::Duration::from_secs(2));
    let process_events = SysinfoProcessEvents::spawn(config.target_process_name.clone(), poll_interval);

    // 6. Remove a stale socket and bind last, only after everything else
    // has succeeded.
    if config.socket_path.exists() {
        std::fs::remove_file(&config.socket_path)?;
    }
    let listener = UnixListener::bind(&config.socket_path)
        .map_err(|e| DaemonError::BindFailed(config.socket_path.clone(), e))?;

    info!("daemon started, watching {}", config.target_process_name);

    Ok(StartupResult {
        daemon: DaemonState {
            config: config.clone(),
            lock_file,
            supervisor,
            start_time: Instant::now(),
        },
        listener,
        process_events,
    })
}

fn cleanup_on_failure(config: &Config) {
    if config.socket_path.exists() {
        let _ = std::fs::remove_file(&config.socket_path);
    }
    if config.lock_path.exists() {
        let _ = std::fs::remove_file(&config.lock_path);
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
