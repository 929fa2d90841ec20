// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_advances_on_its_own() {
    let clock = SystemClock;
    let t0 = clock.now();
    std::thread::sleep(Duration::from_millis(5));
    assert!(clock.now() >= t0);
}

#[test]
fn fake_clock_holds_still_until_advanced() {
    let clock = FakeClock::new();
    let t0 = clock.now();
    assert_eq!(clock.now(), t0);
    clock.advance(Duration::from_secs(3));
    assert_eq!(clock.now(), t0 + Duration::from_secs(3));
}

#[test]
fn fake_clock_clones_share_state() {
    let clock = FakeClock::new();
    let other = clock.clone();
    clock.advance(Duration::from_secs(1));
    assert_eq!(clock.now(), other.now());
}
