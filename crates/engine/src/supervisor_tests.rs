// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Instant;

use sentinel_adapters::{Element, FakeAxDriver, FakeNotifyAdapter, FakePreferenceStore};
use sentinel_core::{FakeClock, Instance, Locator, MatchValue, RecoveryKind, Status, SupervisorConfig};

use super::*;

type TestSupervisor = Supervisor<FakeAxDriver, FakeNotifyAdapter, FakePreferenceStore, FakeClock>;

fn generating_indicator_locator() -> Locator {
    Locator::single("role", MatchValue::Exact("status_text".into()), 6)
}

fn connection_indicator_locator() -> Locator {
    Locator::single("role", MatchValue::Exact("connection_banner".into()), 6)
}

fn main_input_locator() -> Locator {
    Locator::single("role", MatchValue::Exact("textbox".into()), 6)
}

fn new_supervisor() -> (TestSupervisor, FakeAxDriver) {
    let ax = FakeAxDriver::new();
    let notify = FakeNotifyAdapter::new();
    let preferences = FakePreferenceStore::new();
    let clock = FakeClock::new();
    let config = SupervisorConfig::default();
    let sup = Supervisor::new(ax.clone(), notify, preferences, clock, config);
    (sup, ax)
}

#[tokio::test]
async fn s1_positive_activity_clears_prior_counters() {
    let (sup, ax) = new_supervisor();
    let mut inst = Instance::new(1, "Target", Instant::now());
    inst.auto_interventions_since_positive = 2;
    inst.consecutive_recovery_failures = 1;
    sup.lifecycle().insert_for_test(inst);

    ax.set_query_result(
        generating_indicator_locator(),
        Some(Element::with_text("Generating response…")),
    );

    sup.process_instance(1).await;

    let snapshot = sup.instances_snapshot();
    let inst = snapshot.iter().find(|i| i.pid == 1).unwrap();
    assert_eq!(inst.auto_interventions_since_positive, 0);
    assert_eq!(inst.consecutive_recovery_failures, 0);
    assert_eq!(inst.status, Status::Working("Generating response…".to_string()));
}

#[tokio::test]
async fn s3_intervention_limit_pauses_and_resume_interventions_clears_it() {
    let (sup, _ax) = new_supervisor();
    let mut inst = Instance::new(1, "Target", Instant::now());
    inst.auto_interventions_since_positive = 5;
    sup.lifecycle().insert_for_test(inst);

    sup.process_instance(1).await;
    let snapshot = sup.instances_snapshot();
    let inst = snapshot.iter().find(|i| i.pid == 1).unwrap();
    assert_eq!(inst.status, Status::Paused("intervention limit".to_string()));

    sup.resume_interventions(1);
    let snapshot = sup.instances_snapshot();
    let inst = snapshot.iter().find(|i| i.pid == 1).unwrap();
    assert_eq!(inst.auto_interventions_since_positive, 0);
    assert_eq!(inst.status, Status::Idle);
}

#[tokio::test]
async fn connection_issue_attempts_intervention_without_touching_budget() {
    let (sup, ax) = new_supervisor();
    ax.set_query_result(
        connection_indicator_locator(),
        Some(Element::with_text("connection lost, please reconnect")),
    );

    let inst = Instance::new(1, "Target", Instant::now());
    sup.lifecycle().insert_for_test(inst);

    sup.process_instance(1).await;

    // No perform() result was scripted, so the action fails and the
    // intervention counters are left untouched (only record_success moves
    // them, and it never ran).
    let snapshot = sup.instances_snapshot();
    let inst = snapshot.iter().find(|i| i.pid == 1).unwrap();
    assert!(matches!(inst.status, Status::Error(_)));
    assert_eq!(inst.auto_interventions_since_positive, 0);
}

#[tokio::test]
async fn s5_persistent_failures_become_unrecoverable() {
    let (sup, _ax) = new_supervisor();
    let mut inst = Instance::new(1, "Target", Instant::now());
    inst.consecutive_recovery_failures = 3;
    sup.lifecycle().insert_for_test(inst);

    sup.process_instance(1).await;

    let snapshot = sup.instances_snapshot();
    let inst = snapshot.iter().find(|i| i.pid == 1).unwrap();
    assert!(matches!(inst.status, Status::Unrecoverable(_)));
    assert!(inst.unrecoverable_reason.is_some());
}

#[tokio::test]
async fn process_instance_returns_false_for_unknown_pid() {
    let (sup, _ax) = new_supervisor();
    assert!(!sup.process_instance(99).await);
}

#[test]
fn pause_and_resume_monitoring_global_toggle_the_scheduler() {
    let (sup, _ax) = new_supervisor();
    sup.pause_monitoring_global();
    assert!(!sup.scheduler.is_monitoring());
    sup.resume_monitoring_global();
    assert!(sup.scheduler.is_monitoring());
}

#[tokio::test]
async fn nudge_now_bypasses_classification_but_honors_block() {
    let (sup, ax) = new_supervisor();
    let mut inst = Instance::new(1, "Target", Instant::now());
    inst.unrecoverable_reason = Some("blocked".to_string());
    sup.lifecycle().insert_for_test(inst);
    ax.set_perform_result(main_input_locator(), Ok(()));

    sup.nudge_now(1).await;

    let snapshot = sup.instances_snapshot();
    let inst = snapshot.iter().find(|i| i.pid == 1).unwrap();
    assert!(!matches!(inst.status, Status::Recovering(RecoveryKind::Stuck, _)));
}

#[tokio::test]
async fn nudge_now_runs_when_not_blocked() {
    let (sup, ax) = new_supervisor();
    let inst = Instance::new(1, "Target", Instant::now());
    sup.lifecycle().insert_for_test(inst);
    ax.set_perform_result(main_input_locator(), Ok(()));

    sup.nudge_now(1).await;

    let snapshot = sup.instances_snapshot();
    let inst = snapshot.iter().find(|i| i.pid == 1).unwrap();
    assert_eq!(inst.status, Status::Recovering(RecoveryKind::Stuck, 1));
}

#[tokio::test]
async fn session_log_snapshot_reflects_intervention_entries() {
    let (sup, ax) = new_supervisor();
    let inst = Instance::new(1, "Target", Instant::now());
    sup.lifecycle().insert_for_test(inst);
    ax.set_perform_result(main_input_locator(), Ok(()));

    sup.nudge_now(1).await;

    let log = sup.session_log_snapshot();
    assert!(!log.is_empty());
}

#[test]
fn instances_snapshot_reflects_inserted_instances() {
    let (sup, _ax) = new_supervisor();
    sup.lifecycle().insert_for_test(Instance::new(1, "Target", Instant::now()));
    let snapshot = sup.instances_snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].pid, 1);
}
