// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process-event source for testing: events are injected by the test
//! via the paired sender.
#![cfg_attr(coverage_nightly, coverage(off))]

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ProcessEvent, ProcessEvents};

pub struct FakeProcessEvents {
    rx: mpsc::Receiver<ProcessEvent>,
}

impl FakeProcessEvents {
    /// Returns the fake source plus a sender tests use to inject events.
    pub fn new() -> (Self, mpsc::Sender<ProcessEvent>) {
        let (tx, rx) = mpsc::channel(32);
        (Self { rx }, tx)
    }
}

#[async_trait]
impl ProcessEvents for FakeProcessEvents {
    async fn recv(&mut self) -> Option<ProcessEvent> {
        self.rx.recv().await
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
