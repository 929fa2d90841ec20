// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn records_notifications_sounds_and_flashes() {
    let adapter = FakeNotifyAdapter::new();
    adapter.notify("Unrecoverable", "button not found").await.unwrap();
    adapter.play_sound("chime").await.unwrap();
    adapter.flash_icon().await.unwrap();
    adapter.flash_icon().await.unwrap();

    let calls = adapter.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "Unrecoverable");
    assert_eq!(adapter.sounds(), vec!["chime".to_string()]);
    assert_eq!(adapter.flash_count(), 2);
}
