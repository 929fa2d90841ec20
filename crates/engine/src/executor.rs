// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Intervention Executor: performs the deterministic sub-protocol for
//! each `RecoveryKind`, updates counters, records `PendingObservation`, and
//! emits session log / feedback-channel effects.
//!
//! Every AX action and every side channel (session log, sound, icon flash,
//! notification, locator cache) this module touches is modeled as an
//! `Effect` and dispatched through `run_effect`/`execute_inner`, mirroring
//! the teacher's `execute`/`execute_inner` span-wrapped dispatch.

use std::time::Duration;

use sentinel_adapters::{AxDriver, AxError, NotifyAdapter, PreferenceStore};
use sentinel_core::{
    Clock, Effect, Instance, LogLevel, LogicalElement, PendingObservation, RecoveryKind, Status,
    SupervisorConfig,
};
use tracing::Instrument;

use crate::locator_store::LocatorStore;
use crate::session_log::SessionLog;

/// A short cooperative pause between sub-steps of a multi-step protocol.
const SUB_STEP_DELAY: Duration = Duration::from_millis(150);

/// Performs recovery sub-protocols against one target process.
pub struct Executor<D: AxDriver, N: NotifyAdapter, P: PreferenceStore, C: Clock> {
    ax: D,
    notify: N,
    locator_store: std::sync::Arc<LocatorStore<P>>,
    session_log: SessionLog,
    clock: C,
}

impl<D: AxDriver, N: NotifyAdapter, P: PreferenceStore, C: Clock> Executor<D, N, P, C> {
    pub fn new(
        ax: D,
        notify: N,
        locator_store: std::sync::Arc<LocatorStore<P>>,
        session_log: SessionLog,
        clock: C,
    ) -> Self {
        Executor {
            ax,
            notify,
            locator_store,
            session_log,
            clock,
        }
    }

    /// Post a user-facing notification, used only on `Unrecoverable` and
    /// intervention-limit-pause transitions, gated by the caller's config
    /// check. Failures are logged, never propagated.
    pub async fn notify_user(&self, title: &str, message: &str) {
        if let Err(e) = self.notify.notify(title, message).await {
            tracing::warn!(error = %e, "notification delivery failed");
        }
    }

    /// Run the sub-protocol for `kind` against `instance`.
    pub async fn execute(&self, instance: &mut Instance, kind: RecoveryKind, config: &SupervisorConfig) {
        match kind {
            RecoveryKind::Connection => self.execute_connection(instance, config).await,
            RecoveryKind::ForceStop => self.execute_force_stop(instance, config).await,
            RecoveryKind::StopGenerating => self.execute_stop_generating(instance, config).await,
            RecoveryKind::Stuck => self.execute_stuck(instance, config).await,
        }
    }

    /// Dispatch a single `Effect` with a tracing span and elapsed-time log
    /// around it, then hand off to `execute_inner` for the actual work.
    async fn run_effect(&self, instance: &mut Instance, effect: Effect) -> Result<(), AxError> {
        let op_name = effect.name();
        let fields = effect.fields();
        let span = tracing::info_span!("effect", effect = op_name);
        async {
            tracing::debug!(?fields, "executing effect");
            let start = std::time::Instant::now();
            let result = self.execute_inner(instance, effect).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "effect completed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "effect failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    /// The one place that turns an `Effect` into a real side effect:
    /// an AX call, a session log entry, a feedback-channel nudge, or a
    /// locator cache write. AX failures are the only ones propagated;
    /// every other effect kind cannot fail from the Executor's point of
    /// view (a dropped notification is logged by `notify_user`'s caller,
    /// never retried here).
    async fn execute_inner(&self, instance: &mut Instance, effect: Effect) -> Result<(), AxError> {
        match effect {
            Effect::Press { locator, .. } => self.ax.perform(instance.pid, &locator, "press", None).await,
            Effect::SetValue { locator, value, .. } => {
                self.ax.perform(instance.pid, &locator, "set_value", Some(&value)).await
            }
            Effect::RecordPendingObservation { recovery_kind, .. } => {
                let attempt = instance.auto_interventions_since_positive;
                instance.pending_observation = Some(PendingObservation {
                    started_at: self.clock.now(),
                    intervention_count_at_start: attempt.saturating_sub(1),
                });
                instance.last_activity_time = self.clock.now();
                instance.status = Status::Recovering(recovery_kind, attempt);
                Ok(())
            }
            Effect::LogSessionEntry { pid, level, message } => {
                self.session_log.record(level, message, pid);
                Ok(())
            }
            Effect::PlaySound { name } => {
                let _ = self.notify.play_sound(&name).await;
                Ok(())
            }
            Effect::FlashIcon => {
                let _ = self.notify.flash_icon().await;
                Ok(())
            }
            Effect::Notify { title, message } => {
                self.notify_user(&title, &message).await;
                Ok(())
            }
            Effect::CacheLocator { element, pid, locator } => {
                self.locator_store.cache_success(element, pid, locator);
                Ok(())
            }
        }
    }

    async fn execute_connection(&self, instance: &mut Instance, config: &SupervisorConfig) {
        let Ok(locator) = self
            .locator_store
            .resolve(LogicalElement::ResumeConnectionButton, instance.pid, &self.ax)
            .await
        else {
            // Resolution failure for Connection falls through to Stuck,
            // which resets connection_resume_clicks on our behalf. If
            // Stuck's own cascade also exhausts, report the compound
            // failure under the button the Classifier originally asked
            // for, not Stuck's own element.
            self.execute_stuck(instance, config).await;
            if matches!(instance.status, Status::Unrecoverable(_)) {
                let reason = format!("{} not found", LogicalElement::ResumeConnectionButton);
                instance.unrecoverable_reason = Some(reason.clone());
                instance.status = Status::Unrecoverable(reason.clone());
                let pid = instance.pid;
                let _ = self
                    .run_effect(
                        instance,
                        Effect::LogSessionEntry {
                            pid: Some(pid),
                            level: LogLevel::Error,
                            message: format!("compound failure: {reason}"),
                        },
                    )
                    .await;
            }
            return;
        };

        let pid = instance.pid;
        let effect = Effect::Press {
            element: LogicalElement::ResumeConnectionButton,
            locator: locator.clone(),
        };
        match self.run_effect(instance, effect).await {
            Ok(()) => {
                let _ = self
                    .run_effect(
                        instance,
                        Effect::CacheLocator {
                            element: LogicalElement::ResumeConnectionButton,
                            pid,
                            locator,
                        },
                    )
                    .await;
                instance.connection_resume_clicks += 1;
                self.record_success(instance, RecoveryKind::Connection, config).await;
            }
            Err(e) => {
                self.record_action_failure(instance, LogicalElement::ResumeConnectionButton, &e.to_string())
                    .await
            }
        }
    }

    async fn execute_force_stop(&self, instance: &mut Instance, config: &SupervisorConfig) {
        let Some(locator) = self
            .resolve_or_unrecoverable(instance, LogicalElement::ForceStopResumeLink)
            .await
        else {
            return;
        };

        let pid = instance.pid;
        let effect = Effect::Press {
            element: LogicalElement::ForceStopResumeLink,
            locator: locator.clone(),
        };
        match self.run_effect(instance, effect).await {
            Ok(()) => {
                let _ = self
                    .run_effect(
                        instance,
                        Effect::CacheLocator {
                            element: LogicalElement::ForceStopResumeLink,
                            pid,
                            locator,
                        },
                    )
                    .await;
                instance.connection_resume_clicks = 0;
                self.record_success(instance, RecoveryKind::ForceStop, config).await;
            }
            Err(e) => {
                self.record_action_failure(instance, LogicalElement::ForceStopResumeLink, &e.to_string())
                    .await
            }
        }
    }

    async fn execute_stop_generating(&self, instance: &mut Instance, config: &SupervisorConfig) {
        let Some(stop_locator) = self
            .resolve_or_unrecoverable(instance, LogicalElement::StopGeneratingButton)
            .await
        else {
            return;
        };

        let pid = instance.pid;
        let press_stop = Effect::Press {
            element: LogicalElement::StopGeneratingButton,
            locator: stop_locator.clone(),
        };
        if let Err(e) = self.run_effect(instance, press_stop).await {
            self.record_action_failure(instance, LogicalElement::StopGeneratingButton, &e.to_string())
                .await;
            return;
        }
        let _ = self
            .run_effect(
                instance,
                Effect::CacheLocator {
                    element: LogicalElement::StopGeneratingButton,
                    pid,
                    locator: stop_locator,
                },
            )
            .await;

        tokio::time::sleep(SUB_STEP_DELAY).await;

        let Some(resume_locator) = self
            .resolve_or_unrecoverable(instance, LogicalElement::ResumeConnectionButton)
            .await
        else {
            return;
        };

        let press_resume = Effect::Press {
            element: LogicalElement::ResumeConnectionButton,
            locator: resume_locator.clone(),
        };
        match self.run_effect(instance, press_resume).await {
            Ok(()) => {
                let _ = self
                    .run_effect(
                        instance,
                        Effect::CacheLocator {
                            element: LogicalElement::ResumeConnectionButton,
                            pid,
                            locator: resume_locator,
                        },
                    )
                    .await;
                self.record_success(instance, RecoveryKind::StopGenerating, config).await;
            }
            Err(e) => {
                self.record_action_failure(instance, LogicalElement::ResumeConnectionButton, &e.to_string())
                    .await
            }
        }
    }

    async fn execute_stuck(&self, instance: &mut Instance, config: &SupervisorConfig) {
        let Some(locator) = self
            .resolve_or_unrecoverable(instance, LogicalElement::MainInputField)
            .await
        else {
            return;
        };

        let pid = instance.pid;
        let raise = Effect::Press {
            element: LogicalElement::MainInputField,
            locator: locator.clone(),
        };
        if let Err(e) = self.run_effect(instance, raise).await {
            self.record_action_failure(instance, LogicalElement::MainInputField, &e.to_string())
                .await;
            return;
        }

        let nudge_text = if config.nudge_text.is_empty() {
            " "
        } else {
            config.nudge_text.as_str()
        };
        let set_value = Effect::SetValue {
            element: LogicalElement::MainInputField,
            locator: locator.clone(),
            value: nudge_text.to_string(),
        };
        if let Err(e) = self.run_effect(instance, set_value).await {
            self.record_action_failure(instance, LogicalElement::MainInputField, &e.to_string())
                .await;
            return;
        }

        tokio::time::sleep(SUB_STEP_DELAY).await;

        let submit = Effect::Press {
            element: LogicalElement::MainInputField,
            locator: locator.clone(),
        };
        match self.run_effect(instance, submit).await {
            Ok(()) => {
                let _ = self
                    .run_effect(
                        instance,
                        Effect::CacheLocator {
                            element: LogicalElement::MainInputField,
                            pid,
                            locator,
                        },
                    )
                    .await;
                instance.connection_resume_clicks = 0;
                self.record_success(instance, RecoveryKind::Stuck, config).await;
            }
            Err(e) => {
                self.record_action_failure(instance, LogicalElement::MainInputField, &e.to_string())
                    .await
            }
        }
    }

    /// Resolve `element` for `instance`, entering `Unrecoverable` and
    /// logging if the cascade is exhausted.
    async fn resolve_or_unrecoverable(
        &self,
        instance: &mut Instance,
        element: LogicalElement,
    ) -> Option<sentinel_core::Locator> {
        match self.locator_store.resolve(element, instance.pid, &self.ax).await {
            Ok(locator) => Some(locator),
            Err(_) => {
                let reason = format!("{element} not found");
                instance.unrecoverable_reason = Some(reason.clone());
                instance.status = Status::Unrecoverable(reason.clone());
                let pid = instance.pid;
                let _ = self
                    .run_effect(
                        instance,
                        Effect::LogSessionEntry {
                            pid: Some(pid),
                            level: LogLevel::Error,
                            message: reason,
                        },
                    )
                    .await;
                None
            }
        }
    }

    /// Record a successful intervention: counters, `PendingObservation`,
    /// status, feedback channels, session log.
    async fn record_success(&self, instance: &mut Instance, kind: RecoveryKind, config: &SupervisorConfig) {
        instance.auto_interventions_since_positive += 1;
        let attempt = instance.auto_interventions_since_positive;
        let pid = instance.pid;

        let _ = self
            .run_effect(instance, Effect::RecordPendingObservation { pid, recovery_kind: kind })
            .await;

        let _ = self
            .run_effect(
                instance,
                Effect::LogSessionEntry {
                    pid: Some(pid),
                    level: LogLevel::Info,
                    message: format!("intervention: {kind} (attempt {attempt})"),
                },
            )
            .await;

        if config.sound_on_intervention {
            let _ = self
                .run_effect(instance, Effect::PlaySound { name: "intervention".to_string() })
                .await;
            let _ = self.run_effect(instance, Effect::FlashIcon).await;
        }
    }

    /// Record a failed action: no counters move, status becomes `Error`.
    async fn record_action_failure(&self, instance: &mut Instance, element: LogicalElement, reason: &str) {
        let message = format!("{element} action failed: {reason}");
        instance.status = Status::Error(message.clone());
        let pid = instance.pid;
        let _ = self
            .run_effect(
                instance,
                Effect::LogSessionEntry { pid: Some(pid), level: LogLevel::Error, message },
            )
            .await;
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
