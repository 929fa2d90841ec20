// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction so the tick loop, the observation-window check, and the
//! stuck-timeout check can be driven by a fake clock in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A source of monotonic time.
///
/// The supervision core never calls `Instant::now()` directly; every
/// timestamp comparison goes through a `Clock` so tests can advance time
/// deterministically without sleeping.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Current monotonic instant.
    fn now(&self) -> Instant;
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only advances when told to, for deterministic tests.
///
/// `Instant` has no public constructor, so `FakeClock` anchors a real
/// `Instant` at construction time and tracks an offset in milliseconds from
/// it; `now()` returns the anchor plus the accumulated offset.
#[derive(Debug, Clone)]
pub struct FakeClock {
    anchor: Instant,
    offset_ms: std::sync::Arc<AtomicU64>,
}

impl FakeClock {
    /// A fake clock starting "now".
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
            offset_ms: std::sync::Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.offset_ms
            .fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.anchor + Duration::from_millis(self.offset_ms.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
