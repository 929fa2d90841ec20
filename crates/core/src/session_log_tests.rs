// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_entry_carries_fields_through() {
    let entry = SessionLogEntry::new(LogLevel::Warn, "AX call timed out", Some(99));
    assert_eq!(entry.level, LogLevel::Warn);
    assert_eq!(entry.message, "AX call timed out");
    assert_eq!(entry.pid, Some(99));
}

#[test]
fn entry_serializes_round_trip() {
    let entry = SessionLogEntry::new(LogLevel::Info, "hello", None);
    let json = serde_json::to_string(&entry).unwrap();
    let back: SessionLogEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(entry, back);
}
