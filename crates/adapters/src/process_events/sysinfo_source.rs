// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real process-event source: polls the OS process table via `sysinfo` on a
//! background task and reports launch/termination of processes whose name
//! matches the configured target.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};
use tokio::sync::mpsc;

use super::{ProcessEvent, ProcessEvents};

/// Polls for processes named `process_name` and reports their arrival and
/// departure. `process_name` is matched case-sensitively against the OS
/// process name (not the full command line).
pub struct SysinfoProcessEvents {
    rx: mpsc::Receiver<ProcessEvent>,
}

impl SysinfoProcessEvents {
    /// Spawn the background poll loop and return the receiving half.
    pub fn spawn(process_name: impl Into<String>, poll_interval: Duration) -> Self {
        let process_name = process_name.into();
        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(async move {
            run_poll_loop(process_name, poll_interval, tx).await;
        });
        Self { rx }
    }
}

async fn run_poll_loop(process_name: String, poll_interval: Duration, tx: mpsc::Sender<ProcessEvent>) {
    let mut system = System::new_with_specifics(
        RefreshKind::nothing().with_processes(ProcessRefreshKind::everything()),
    );
    let mut known: HashSet<u32> = HashSet::new();
    loop {
        system.refresh_processes(sysinfo::ProcessesToUpdate::All, true);
        let mut seen = HashSet::new();
        for (pid, process) in system.processes() {
            if process.name().to_string_lossy() != process_name {
                continue;
            }
            let pid = pid.as_u32();
            seen.insert(pid);
            if known.insert(pid) {
                let event = ProcessEvent::Launched {
                    pid,
                    display_label: process_name.clone(),
                };
                if tx.send(event).await.is_err() {
                    return;
                }
            }
        }
        let gone: Vec<u32> = known.difference(&seen).copied().collect();
        for pid in gone {
            known.remove(&pid);
            if tx.send(ProcessEvent::Terminated { pid }).await.is_err() {
                return;
            }
        }
        tokio::time::sleep(poll_interval).await;
    }
}

#[async_trait]
impl ProcessEvents for SysinfoProcessEvents {
    async fn recv(&mut self) -> Option<ProcessEvent> {
        self.rx.recv().await
    }
}
