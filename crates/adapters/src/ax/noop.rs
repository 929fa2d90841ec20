// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op AX driver: every query resolves to nothing, every action fails.
//! Used when no real accessibility backend is wired in, so the rest of the
//! supervision engine still runs (and correctly marks every instance
//! `Unrecoverable`, rather than silently doing nothing).

use async_trait::async_trait;
use sentinel_core::Locator;

use super::{AxDriver, AxError, Element};

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpAxDriver;

impl NoOpAxDriver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AxDriver for NoOpAxDriver {
    async fn query(
        &self,
        _pid: u32,
        _locator: &Locator,
        _attributes_wanted: &[&str],
    ) -> Result<Option<Element>, AxError> {
        Ok(None)
    }

    async fn perform(
        &self,
        _pid: u32,
        _locator: &Locator,
        _action_name: &str,
        _value: Option<&str>,
    ) -> Result<(), AxError> {
        Err(AxError::NotFound)
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
