// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Classifier: maps one Instance's stored state plus fresh AX
//! observations to exactly one `Decision` per tick, in a fixed order where
//! earlier steps short-circuit later ones.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Instant;

use sentinel_adapters::{AxDriver, PreferenceStore};
use sentinel_core::{Decision, Instance, LogicalElement, RecoveryKind, SupervisorConfig};

use crate::locator_store::LocatorStore;

const SIDEBAR_PROBE_ATTRIBUTES: &[&str] = &["text"];
const TEXT_PROBE_ATTRIBUTES: &[&str] = &["text"];

fn matches_any_keyword(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(&k.to_lowercase()))
}

fn sidebar_fingerprint(children: &[String], delimiter: &str) -> u64 {
    let joined = children.join(delimiter);
    let mut hasher = DefaultHasher::new();
    joined.hash(&mut hasher);
    hasher.finish()
}

/// Classify one Instance for this tick.
///
/// Owns the mutations spec'd as part of classification itself (clearing an
/// expired `PendingObservation`, resetting the three budget counters on
/// positive activity, storing the sidebar fingerprint baseline); everything
/// else is translated from the returned `Decision` by the caller.
pub async fn classify<D: AxDriver, P: PreferenceStore>(
    instance: &mut Instance,
    config: &SupervisorConfig,
    locator_store: &LocatorStore<P>,
    ax: &D,
    now: Instant,
) -> Decision {
    // 1. Unrecoverable instances never reclassify into action.
    if instance.unrecoverable_reason.is_some() {
        return Decision::NoOp;
    }
    // 2. Manually paused instances never reclassify into action.
    if instance.manual_pause {
        return Decision::NoOp;
    }

    // 3. Resolve any expired pending observation.
    if let Some(pending) = instance.pending_observation {
        if now.saturating_duration_since(pending.started_at) > config.observation_window {
            let reset_occurred =
                instance.auto_interventions_since_positive < pending.intervention_count_at_start + 1;
            if !reset_occurred {
                instance.consecutive_recovery_failures += 1;
            }
            instance.pending_observation = None;
        }
    }

    // 4. Persistent failure.
    if instance.consecutive_recovery_failures >= config.max_consecutive_recovery_failures {
        return Decision::EnterUnrecoverable("persistent recovery failures".to_string());
    }

    // 5. Intervention budget exhausted.
    if instance.auto_interventions_since_positive >= config.max_interventions_per_positive {
        return Decision::EnterParameterizedPause("intervention limit".to_string());
    }

    // 6. Positive-activity check.
    if let Ok(locator) = locator_store
        .resolve(LogicalElement::GeneratingIndicatorText, instance.pid, ax)
        .await
    {
        if let Ok(Some(element)) = ax.query(instance.pid, &locator, TEXT_PROBE_ATTRIBUTES).await {
            if let Some(text) = element.text() {
                if matches_any_keyword(text, &config.positive_work_keywords) {
                    let detail = text.to_string();
                    instance.apply_positive_activity(now);
                    return Decision::MarkPositive(detail);
                }
            }
        }
    }

    // 7. Sidebar-activity check.
    if config.sidebar_monitoring_enabled {
        if let Ok(locator) = locator_store
            .resolve(LogicalElement::SidebarActivityArea, instance.pid, ax)
            .await
        {
            if let Ok(Some(element)) = ax.query(instance.pid, &locator, SIDEBAR_PROBE_ATTRIBUTES).await {
                let children: Vec<String> = (0..config.sidebar_fingerprint_children)
                    .filter_map(|i| element.attributes.get(&format!("child_{i}")).cloned())
                    .collect();
                let new_hash = sidebar_fingerprint(&children, &config.sidebar_fingerprint_delimiter);
                match instance.last_sidebar_fingerprint {
                    Some(prev) if prev != new_hash => {
                        instance.last_sidebar_fingerprint = Some(new_hash);
                        instance.apply_positive_activity(now);
                        return Decision::NoteSidebarActivity(new_hash);
                    }
                    Some(_) => {}
                    None => {
                        instance.last_sidebar_fingerprint = Some(new_hash);
                    }
                }
            }
        }
    }

    // 8. Connection-issue check.
    if config.connection_recovery_enabled {
        if let Ok(locator) = locator_store
            .resolve(LogicalElement::ConnectionErrorIndicator, instance.pid, ax)
            .await
        {
            if let Ok(Some(element)) = ax.query(instance.pid, &locator, TEXT_PROBE_ATTRIBUTES).await {
                if let Some(text) = element.text() {
                    if matches_any_keyword(text, &config.connection_issue_keywords) {
                        if instance.connection_resume_clicks < config.max_connection_resume_clicks {
                            return Decision::Intervene(RecoveryKind::Connection);
                        }
                        return Decision::Intervene(RecoveryKind::Stuck);
                    }
                }
            }
        }
    }

    // 9. Force-stop check.
    if config.force_stop_recovery_enabled {
        if let Ok(locator) = locator_store
            .resolve(LogicalElement::ForceStopResumeLink, instance.pid, ax)
            .await
        {
            if let Ok(Some(_)) = ax.query(instance.pid, &locator, TEXT_PROBE_ATTRIBUTES).await {
                return Decision::Intervene(RecoveryKind::ForceStop);
            }
        }
    }

    // 10. General-error check.
    if let Ok(locator) = locator_store
        .resolve(LogicalElement::ErrorMessagePopup, instance.pid, ax)
        .await
    {
        if let Ok(Some(element)) = ax.query(instance.pid, &locator, TEXT_PROBE_ATTRIBUTES).await {
            if let Some(text) = element.text() {
                if matches_any_keyword(text, &config.stuck_message_keywords) {
                    return Decision::Intervene(RecoveryKind::StopGenerating);
                }
            }
        }
    }

    // 11. Stuck-timeout check.
    if config.stuck_recovery_enabled
        && now.saturating_duration_since(instance.last_activity_time) > config.stuck_timeout
    {
        return Decision::Intervene(RecoveryKind::Stuck);
    }

    // 12. Nothing matched.
    Decision::NoOp
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
