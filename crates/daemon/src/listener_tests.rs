// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use sentinel_adapters::{DesktopNotifyAdapter, FileBackedPreferenceStore, NoOpAxDriver, TracedAx};
use sentinel_core::{SupervisorConfig, SystemClock};
use sentinel_engine::Supervisor;
use tokio::sync::Notify;

use super::*;

async fn test_ctx() -> ListenCtx {
    let dir = tempfile::tempdir().unwrap();
    let preferences = FileBackedPreferenceStore::load(dir.path().join("prefs.json"))
        .await
        .unwrap();
    let supervisor = Supervisor::new(
        TracedAx::new(NoOpAxDriver::new()),
        DesktopNotifyAdapter::new(),
        preferences,
        SystemClock,
        SupervisorConfig::default(),
    );
    ListenCtx {
        supervisor,
        start_time: Instant::now(),
        shutdown: Arc::new(Notify::new()),
    }
}

#[tokio::test]
async fn ping_replies_pong() {
    let ctx = test_ctx().await;
    let response = handle_request(Request::Ping, &ctx).await;
    assert!(matches!(response, Response::Pong));
}

#[tokio::test]
async fn hello_replies_with_protocol_version() {
    let ctx = test_ctx().await;
    let response = handle_request(
        Request::Hello { version: "whatever".to_string() },
        &ctx,
    )
    .await;
    assert!(matches!(response, Response::Hello { version } if version == PROTOCOL_VERSION));
}

#[tokio::test]
async fn status_reports_zero_instances_on_a_fresh_supervisor() {
    let ctx = test_ctx().await;
    let response = handle_request(Request::Status, &ctx).await;
    match response {
        Response::Status { instances_active, monitoring_paused, .. } => {
            assert_eq!(instances_active, 0);
            assert!(!monitoring_paused);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn list_instances_is_empty_on_a_fresh_supervisor() {
    let ctx = test_ctx().await;
    let response = handle_request(Request::ListInstances, &ctx).await;
    assert!(matches!(response, Response::Instances { instances } if instances.is_empty()));
}

#[tokio::test]
async fn pause_then_resume_monitoring_is_reflected_in_status() {
    let ctx = test_ctx().await;
    assert!(matches!(
        handle_request(Request::PauseMonitoring, &ctx).await,
        Response::Ok
    ));
    match handle_request(Request::Status, &ctx).await {
        Response::Status { monitoring_paused, .. } => assert!(monitoring_paused),
        other => panic!("unexpected response: {other:?}"),
    }

    assert!(matches!(
        handle_request(Request::ResumeMonitoring, &ctx).await,
        Response::Ok
    ));
    match handle_request(Request::Status, &ctx).await {
        Response::Status { monitoring_paused, .. } => assert!(!monitoring_paused),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn nudge_and_resume_interventions_on_unknown_pid_are_a_no_op_ok() {
    let ctx = test_ctx().await;
    assert!(matches!(
        handle_request(Request::NudgeNow { pid: 999 }, &ctx).await,
        Response::Ok
    ));
    assert!(matches!(
        handle_request(Request::ResumeInterventions { pid: 999 }, &ctx).await,
        Response::Ok
    ));
}

#[tokio::test]
async fn session_log_is_empty_before_any_intervention() {
    let ctx = test_ctx().await;
    let response = handle_request(Request::SessionLog { lines: 10 }, &ctx).await;
    assert!(matches!(response, Response::SessionLog { entries } if entries.is_empty()));
}

#[tokio::test]
async fn shutdown_notifies_the_shutdown_signal() {
    let ctx = test_ctx().await;
    let shutdown = ctx.shutdown.clone();
    let response = handle_request(Request::Shutdown, &ctx).await;
    assert!(matches!(response, Response::ShuttingDown));
    // Does not hang: the permit from notify_one is already available.
    shutdown.notified().await;
}
