// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn events_compare_structurally() {
    assert_eq!(
        ProcessEvent::Launched {
            pid: 1,
            display_label: "Cursor".to_string()
        },
        ProcessEvent::Launched {
            pid: 1,
            display_label: "Cursor".to_string()
        }
    );
    assert_ne!(
        ProcessEvent::Terminated { pid: 1 },
        ProcessEvent::Terminated { pid: 2 }
    );
}
