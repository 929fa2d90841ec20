// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification adapters

mod desktop;
mod noop;

pub use desktop::DesktopNotifyAdapter;
pub use noop::NoOpNotifyAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for sending user-facing feedback: desktop notifications, and
/// (through the same trait) the sound/icon-flash channels, since all three
/// are fire-and-forget "tell the user something happened" calls.
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Post a notification with a title and message body. Used only on
    /// `Unrecoverable` transitions and the intervention-limit pause.
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;

    /// Play a short named feedback clip. Default implementation is a no-op
    /// so adapters that only care about notifications don't have to care.
    async fn play_sound(&self, _name: &str) -> Result<(), NotifyError> {
        Ok(())
    }

    /// Request a brief "flash" animation from the menu-bar icon controller.
    async fn flash_icon(&self) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
