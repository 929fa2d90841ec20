// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Instant;

use sentinel_adapters::{FakeProcessEvents, ProcessEvent};
use sentinel_core::FakeClock;

use super::*;

#[tokio::test]
async fn launch_event_creates_an_instance() {
    let manager = LifecycleManager::new();
    let (events, tx) = FakeProcessEvents::new();
    let manager_clone = manager.clone();

    let run = tokio::spawn(async move {
        manager_clone.run(events, FakeClock::new(), |_| {}).await;
    });

    tx.send(ProcessEvent::Launched {
        pid: 42,
        display_label: "Target".to_string(),
    })
    .await
    .unwrap();
    drop(tx);
    run.await.unwrap();

    assert_eq!(manager.pids(), vec![42]);
}

#[tokio::test]
async fn termination_event_removes_instance_and_notifies() {
    let manager = LifecycleManager::new();
    let (events, tx) = FakeProcessEvents::new();
    let manager_clone = manager.clone();
    let (notify_tx, mut notify_rx) = tokio::sync::mpsc::unbounded_channel();

    let run = tokio::spawn(async move {
        manager_clone
            .run(events, FakeClock::new(), move |pid| {
                let _ = notify_tx.send(pid);
            })
            .await;
    });

    tx.send(ProcessEvent::Launched {
        pid: 7,
        display_label: "Target".to_string(),
    })
    .await
    .unwrap();
    tx.send(ProcessEvent::Terminated { pid: 7 }).await.unwrap();
    drop(tx);
    run.await.unwrap();

    assert!(manager.is_empty());
    assert_eq!(notify_rx.recv().await, Some(7));
}

#[test]
fn relaunch_of_a_live_pid_does_not_reset_its_instance() {
    let manager = LifecycleManager::new();
    manager
        .instances
        .lock()
        .insert(1, Instance::new(1, "Target", Instant::now()));
    manager.with_instance_mut(1, |inst| inst.auto_interventions_since_positive = 3);

    // mirrors exactly what `run`'s Launched branch does internally
    manager
        .instances
        .lock()
        .entry(1)
        .or_insert_with(|| Instance::new(1, "Target", Instant::now()));

    let counter = manager
        .with_instance_mut(1, |inst| inst.auto_interventions_since_positive)
        .unwrap();
    assert_eq!(counter, 3);
}

#[test]
fn with_instance_mut_is_none_for_unknown_pid() {
    let manager = LifecycleManager::new();
    assert!(manager.with_instance_mut(99, |_| ()).is_none());
}
