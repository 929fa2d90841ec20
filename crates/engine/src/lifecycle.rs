// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Lifecycle Manager: the authoritative PID -> Instance map, populated
//! and drained by consuming a `ProcessEvents` stream.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use sentinel_adapters::ProcessEvents;
use sentinel_core::{Clock, Instance};

/// Owns the live set of target instances. One-way ownership relative to the
/// Scheduler: the Manager owns the map; the Scheduler only reads snapshots
/// and asks to mutate individual instances through `with_instance_mut`.
#[derive(Clone)]
pub struct LifecycleManager {
    instances: Arc<Mutex<HashMap<u32, Instance>>>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        LifecycleManager {
            instances: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The current set of live PIDs, a point-in-time snapshot.
    pub fn pids(&self) -> Vec<u32> {
        self.instances.lock().keys().copied().collect()
    }

    /// A deep snapshot of every live instance, for UI consumption.
    pub fn snapshot(&self) -> Vec<Instance> {
        self.instances.lock().values().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.lock().is_empty()
    }

    /// Run `f` against the instance for `pid`, if it's still live.
    pub fn with_instance_mut<R>(&self, pid: u32, f: impl FnOnce(&mut Instance) -> R) -> Option<R> {
        self.instances.lock().get_mut(&pid).map(f)
    }

    /// Insert an instance directly, bypassing the `ProcessEvents` stream.
    /// Only for tests that need a live instance without driving a fake
    /// event source through `run`.
    #[cfg(test)]
    pub fn insert_for_test(&self, instance: Instance) {
        self.instances.lock().insert(instance.pid, instance);
    }

    /// Consume process-launch/termination events until the source closes.
    /// `on_terminate` is invoked with the PID right after its Instance is
    /// removed, so a caller can drop any per-instance session state (the
    /// Locator Store's session cache) that would otherwise leak.
    pub async fn run<E: ProcessEvents, C: Clock>(
        &self,
        mut events: E,
        clock: C,
        mut on_terminate: impl FnMut(u32),
    ) {
        while let Some(event) = events.recv().await {
            match event {
                sentinel_adapters::ProcessEvent::Launched { pid, display_label } => {
                    let mut instances = self.instances.lock();
                    instances
                        .entry(pid)
                        .or_insert_with(|| Instance::new(pid, display_label, clock.now()));
                }
                sentinel_adapters::ProcessEvent::Terminated { pid } => {
                    self.instances.lock().remove(&pid);
                    on_terminate(pid);
                }
            }
        }
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
