// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the AX driver boundary, notifications,
//! process events, and the preference store.

pub mod ax;
pub mod notify;
pub mod preferences;
pub mod process_events;
pub mod traced;

pub use ax::{AxDriver, AxError, Element, NoOpAxDriver};
pub use notify::{DesktopNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter};
pub use preferences::{FileBackedPreferenceStore, NoOpPreferenceStore, PreferenceError, PreferenceStore};
pub use process_events::{ProcessEvent, ProcessEvents, SysinfoProcessEvents};
pub use traced::TracedAx;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use ax::{AxCall, FakeAxDriver};
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use preferences::FakePreferenceStore;
#[cfg(any(test, feature = "test-support"))]
pub use process_events::FakeProcessEvents;
