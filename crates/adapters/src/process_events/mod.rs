// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process launch/termination event source, filtered by a configured
//! target process name. The Lifecycle Manager consumes exactly one of
//! these per supervisor instance.

mod sysinfo_source;

pub use sysinfo_source::SysinfoProcessEvents;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeProcessEvents;

use async_trait::async_trait;

/// A process-launch or process-termination notification for the
/// configured target process name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    Launched { pid: u32, display_label: String },
    Terminated { pid: u32 },
}

/// A single-consumer stream of `ProcessEvent`s. Unlike the other adapter
/// traits this is not `Clone`/`Sync`: it's a subscription owned by exactly
/// one Lifecycle Manager, not a shared capability called from many places.
#[async_trait]
pub trait ProcessEvents: Send + 'static {
    /// Wait for the next event. Returns `None` once the source is closed
    /// (the event source task has stopped).
    async fn recv(&mut self) -> Option<ProcessEvent>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
