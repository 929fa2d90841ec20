// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The cooperative tick loop. A single task wakes on a fixed interval,
//! asks the caller to process one tick, and exits once monitoring is
//! toggled off or the caller reports no instances remain.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

/// Drives the periodic tick loop described in the scheduling model: no
/// overlapping ticks for the same instance (sequential processing, one
/// task), and an overrun tick is skipped rather than queued, which is
/// exactly `MissedTickBehavior::Skip`.
pub struct Scheduler {
    monitoring: Arc<AtomicBool>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler {
            monitoring: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A handle that can toggle monitoring off/on from outside the loop.
    pub fn monitoring_handle(&self) -> Arc<AtomicBool> {
        self.monitoring.clone()
    }

    pub fn pause(&self) {
        self.monitoring.store(false, Ordering::Release);
    }

    pub fn resume(&self) {
        self.monitoring.store(true, Ordering::Release);
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring.load(Ordering::Acquire)
    }

    /// Run until monitoring is paused or `on_tick` reports no instances
    /// remain. `on_tick` processes one whole tick (a full snapshot of
    /// instances, sequentially) and returns whether any instance remains.
    pub async fn run<F, Fut>(&self, tick_interval: Duration, mut on_tick: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut interval = tokio::time::interval(tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if !self.is_monitoring() {
                break;
            }
            let instances_remain = on_tick().await;
            if !instances_remain {
                break;
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
