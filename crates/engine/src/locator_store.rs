// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locator resolution cascade: user override, then the per-instance session
//! cache (re-verified live), then the bundled default, then a heuristic
//! chain of fallback candidates.

use std::collections::HashMap;

use parking_lot::Mutex;
use sentinel_adapters::{AxDriver, PreferenceStore};
use sentinel_core::{Locator, LogicalElement, MatchValue};

use crate::error::LocatorResolutionError;

/// Attributes requested on every resolution probe; cheap enough to always
/// fetch, so the cascade doesn't need a per-step attribute list.
const PROBE_ATTRIBUTES: &[&str] = &["text", "role", "enabled"];

fn bundled_defaults() -> HashMap<LogicalElement, Locator> {
    let mut map = HashMap::new();
    map.insert(
        LogicalElement::GeneratingIndicatorText,
        Locator::single("role", MatchValue::Exact("status_text".into()), 6),
    );
    map.insert(
        LogicalElement::ErrorMessagePopup,
        Locator::single("role", MatchValue::Exact("alert".into()), 4),
    );
    map.insert(
        LogicalElement::ConnectionErrorIndicator,
        Locator::single("role", MatchValue::Exact("connection_banner".into()), 6),
    );
    map.insert(
        LogicalElement::ResumeConnectionButton,
        Locator::single("name", MatchValue::Contains("Resume".into()), 6),
    );
    map.insert(
        LogicalElement::ForceStopResumeLink,
        Locator::single("name", MatchValue::Contains("Resume the conversation".into()), 6),
    );
    map.insert(
        LogicalElement::MainInputField,
        Locator::single("role", MatchValue::Exact("textbox".into()), 6),
    );
    map.insert(
        LogicalElement::StopGeneratingButton,
        Locator::single("name", MatchValue::Contains("Stop".into()), 6),
    );
    map.insert(
        LogicalElement::SidebarActivityArea,
        Locator::single("role", MatchValue::Exact("sidebar".into()), 4),
    );
    map
}

/// Alternate candidate Locators tried, in order, when the bundled default
/// fails to resolve against the live element tree (UI revisions, locale
/// differences, theme variants).
fn heuristic_chains() -> HashMap<LogicalElement, Vec<Locator>> {
    let mut map: HashMap<LogicalElement, Vec<Locator>> = HashMap::new();
    map.insert(
        LogicalElement::ResumeConnectionButton,
        vec![
            Locator::single("name", MatchValue::Contains("Reconnect".into()), 6),
            Locator::single("name", MatchValue::Contains("Try again".into()), 6),
        ],
    );
    map.insert(
        LogicalElement::ForceStopResumeLink,
        vec![Locator::single("name", MatchValue::Contains("Continue".into()), 6)],
    );
    map.insert(
        LogicalElement::StopGeneratingButton,
        vec![Locator::single("name", MatchValue::Exact("Cancel".into()), 6)],
    );
    map
}

/// Resolves `LogicalElement`s to concrete `Locator`s for a given process,
/// honoring user overrides ahead of everything else and remembering which
/// candidate actually worked per (element, pid) for the life of the
/// instance.
pub struct LocatorStore<P: PreferenceStore> {
    pub(crate) defaults: HashMap<LogicalElement, Locator>,
    pub(crate) heuristics: HashMap<LogicalElement, Vec<Locator>>,
    pub(crate) session_cache: Mutex<HashMap<(LogicalElement, u32), Locator>>,
    pub(crate) preferences: P,
}

impl<P: PreferenceStore> LocatorStore<P> {
    pub fn new(preferences: P) -> Self {
        Self {
            defaults: bundled_defaults(),
            heuristics: heuristic_chains(),
            session_cache: Mutex::new(HashMap::new()),
            preferences,
        }
    }

    /// Resolve `element` for `pid` against the live element tree of `ax`.
    ///
    /// Cascade: user override (trusted, not re-verified) -> session cache
    /// (re-verified; a stale cache entry that no longer resolves is dropped
    /// and the cascade continues) -> bundled default (returned unconditionally,
    /// even if `ax.query` hasn't confirmed it this tick) -> heuristic chain
    /// (first candidate whose `ax.query` returns `Some`).
    pub async fn resolve<D: AxDriver>(
        &self,
        element: LogicalElement,
        pid: u32,
        ax: &D,
    ) -> Result<Locator, LocatorResolutionError> {
        if let Some(locator) = self.preferences.locator_override(element).await {
            return Ok(locator);
        }

        let cached = self.session_cache.lock().get(&(element, pid)).cloned();
        if let Some(cached) = cached {
            if ax.query(pid, &cached, PROBE_ATTRIBUTES).await.ok().flatten().is_some() {
                return Ok(cached);
            }
            self.session_cache.lock().remove(&(element, pid));
        }

        if let Some(default) = self.defaults.get(&element) {
            return Ok(default.clone());
        }

        for candidate in self.heuristics.get(&element).into_iter().flatten() {
            if ax.query(pid, candidate, PROBE_ATTRIBUTES).await.ok().flatten().is_some() {
                return Ok(candidate.clone());
            }
        }

        Err(LocatorResolutionError::NotFound(element))
    }

    /// Record that `locator` successfully resolved `element` for `pid`,
    /// called by the Executor after a successful `perform`, never by
    /// passive classification.
    pub fn cache_success(&self, element: LogicalElement, pid: u32, locator: Locator) {
        self.session_cache.lock().insert((element, pid), locator);
    }

    /// Drop every cached locator for `pid`, called when an instance exits.
    pub fn forget_instance(&self, pid: u32) {
        self.session_cache.lock().retain(|(_, p), _| *p != pid);
    }
}

#[cfg(test)]
#[path = "locator_store_tests.rs"]
mod tests;
