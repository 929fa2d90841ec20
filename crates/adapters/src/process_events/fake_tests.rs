// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn injected_events_are_received_in_order() {
    let (mut fake, tx) = FakeProcessEvents::new();
    tx.send(ProcessEvent::Launched {
        pid: 1,
        display_label: "Cursor".to_string(),
    })
    .await
    .unwrap();
    tx.send(ProcessEvent::Terminated { pid: 1 }).await.unwrap();

    assert_eq!(
        fake.recv().await,
        Some(ProcessEvent::Launched {
            pid: 1,
            display_label: "Cursor".to_string()
        })
    );
    assert_eq!(fake.recv().await, Some(ProcessEvent::Terminated { pid: 1 }));
}

#[tokio::test]
async fn recv_returns_none_once_sender_dropped() {
    let (mut fake, tx) = FakeProcessEvents::new();
    drop(tx);
    assert_eq!(fake.recv().await, None);
}
