// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Supervisor facade: wires the Classifier, Locator Store, Executor,
//! Session Log, and Lifecycle Manager together, drives the tick loop, and
//! exposes the operator command surface.

use std::sync::Arc;

use parking_lot::Mutex;
use sentinel_adapters::{AxDriver, NotifyAdapter, PreferenceStore};
use sentinel_core::{Clock, LogLevel, RecoveryKind, SessionLogEntry, Status, SupervisorConfig};

use crate::classifier::classify;
use crate::executor::Executor;
use crate::lifecycle::LifecycleManager;
use crate::locator_store::LocatorStore;
use crate::scheduler::Scheduler;
use crate::session_log::SessionLog;

/// Facade the daemon binary talks to: one per monitored target process
/// family, shared cheaply by clone across the tick loop and the operator
/// command surface.
pub struct Supervisor<D: AxDriver, N: NotifyAdapter, P: PreferenceStore, C: Clock> {
    ax: D,
    config: Arc<Mutex<SupervisorConfig>>,
    locator_store: Arc<LocatorStore<P>>,
    session_log: SessionLog,
    lifecycle: LifecycleManager,
    executor: Arc<Executor<D, N, P, C>>,
    clock: C,
    scheduler: Arc<Scheduler>,
}

impl<D: AxDriver, N: NotifyAdapter, P: PreferenceStore, C: Clock> Clone for Supervisor<D, N, P, C> {
    fn clone(&self) -> Self {
        Supervisor {
            ax: self.ax.clone(),
            config: self.config.clone(),
            locator_store: self.locator_store.clone(),
            session_log: self.session_log.clone(),
            lifecycle: self.lifecycle.clone(),
            executor: self.executor.clone(),
            clock: self.clock.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<D: AxDriver, N: NotifyAdapter, P: PreferenceStore, C: Clock> Supervisor<D, N, P, C> {
    pub fn new(ax: D, notify: N, preferences: P, clock: C, config: SupervisorConfig) -> Self {
        let locator_store = Arc::new(LocatorStore::new(preferences));
        let session_log = SessionLog::new();
        let executor = Arc::new(Executor::new(
            ax.clone(),
            notify,
            locator_store.clone(),
            session_log.clone(),
            clock.clone(),
        ));
        Supervisor {
            ax,
            config: Arc::new(Mutex::new(config)),
            locator_store,
            session_log,
            lifecycle: LifecycleManager::new(),
            executor,
            clock,
            scheduler: Arc::new(Scheduler::new()),
        }
    }

    pub fn lifecycle(&self) -> &LifecycleManager {
        &self.lifecycle
    }

    pub fn locator_store(&self) -> &Arc<LocatorStore<P>> {
        &self.locator_store
    }

    /// Replace the live config snapshot, effective on the next tick.
    pub fn set_config(&self, config: SupervisorConfig) {
        *self.config.lock() = config;
    }

    pub fn config(&self) -> SupervisorConfig {
        self.config.lock().clone()
    }

    /// Run the tick loop until monitoring is paused or no instances remain.
    pub async fn run(&self) {
        let tick_interval = self.config().clamped_tick_interval();
        let this = self.clone();
        self.scheduler
            .run(tick_interval, move || {
                let this = this.clone();
                async move {
                    let pids = this.lifecycle.pids();
                    for pid in pids {
                        this.process_instance(pid).await;
                    }
                    !this.lifecycle.is_empty()
                }
            })
            .await;
    }

    /// Classify and (if needed) act on one instance. Returns `false` if the
    /// instance is no longer live (terminated mid-tick).
    pub async fn process_instance(&self, pid: u32) -> bool {
        let Some(mut instance) = self.lifecycle.with_instance_mut(pid, |i| i.clone()) else {
            return false;
        };
        let config = self.config();
        let now = self.clock.now();
        let decision = classify(&mut instance, &config, &self.locator_store, &self.ax, now).await;
        self.apply_decision(&mut instance, decision, &config).await;
        self.lifecycle.with_instance_mut(pid, |slot| *slot = instance);
        true
    }

    async fn apply_decision(
        &self,
        instance: &mut sentinel_core::Instance,
        decision: sentinel_core::Decision,
        config: &SupervisorConfig,
    ) {
        use sentinel_core::Decision;
        match decision {
            Decision::NoOp => {
                instance.status = if let Some(reason) = &instance.unrecoverable_reason {
                    Status::Unrecoverable(reason.clone())
                } else if instance.manual_pause {
                    Status::Paused("manual pause".to_string())
                } else {
                    Status::Idle
                };
            }
            Decision::MarkPositive(detail) => {
                instance.status = Status::Working(detail);
            }
            Decision::NoteSidebarActivity(_) => {
                instance.status = Status::Working("Recent Sidebar Activity".to_string());
            }
            Decision::Intervene(kind) => {
                self.executor.execute(instance, kind, config).await;
            }
            Decision::EnterParameterizedPause(reason) => {
                instance.status = Status::Paused(reason.clone());
                if config.notification_on_persistent_error {
                    self.executor
                        .notify_user(&format!("{} paused", instance.display_label), &reason)
                        .await;
                }
            }
            Decision::EnterUnrecoverable(reason) => {
                instance.unrecoverable_reason = Some(reason.clone());
                instance.status = Status::Unrecoverable(reason.clone());
                self.session_log
                    .record(LogLevel::Error, reason.clone(), Some(instance.pid));
                if config.notification_on_persistent_error {
                    self.executor
                        .notify_user(&format!("{} unrecoverable", instance.display_label), &reason)
                        .await;
                }
            }
        }
    }

    /// Stop processing ticks; effective on the next tick boundary.
    pub fn pause_monitoring_global(&self) {
        self.scheduler.pause();
    }

    pub fn resume_monitoring_global(&self) {
        self.scheduler.resume();
    }

    pub fn is_monitoring(&self) -> bool {
        self.scheduler.is_monitoring()
    }

    /// Clear `unrecoverable_reason` and the intervention-limit pause for one
    /// instance, and reset its two failure/intervention counters.
    pub fn resume_interventions(&self, pid: u32) {
        self.lifecycle.with_instance_mut(pid, |instance| {
            instance.unrecoverable_reason = None;
            instance.auto_interventions_since_positive = 0;
            instance.consecutive_recovery_failures = 0;
            if matches!(instance.status, Status::Paused(_) | Status::Unrecoverable(_)) {
                instance.status = Status::Idle;
            }
        });
    }

    /// Force an `Intervene(Stuck)` Decision for one instance, bypassing
    /// classification but still honoring `interventions_blocked`.
    pub async fn nudge_now(&self, pid: u32) {
        let Some(mut instance) = self.lifecycle.with_instance_mut(pid, |i| i.clone()) else {
            return;
        };
        if instance.interventions_blocked() {
            return;
        }
        let config = self.config();
        self.executor.execute(&mut instance, RecoveryKind::Stuck, &config).await;
        self.lifecycle.with_instance_mut(pid, |slot| *slot = instance);
    }

    pub fn session_log_snapshot(&self) -> Vec<SessionLogEntry> {
        self.session_log.snapshot()
    }

    pub fn instances_snapshot(&self) -> Vec<sentinel_core::Instance> {
        self.lifecycle.snapshot()
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
