// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative queries consumed by the AX Driver. Locators are data, not
//! code, so the heuristic chains in `sentinel-engine::locator_store` can be
//! expressed as plain arrays of `Locator` values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How an attribute value is matched against a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "value", rename_all = "snake_case")]
pub enum MatchValue {
    Exact(String),
    Contains(String),
    Regex(String),
}

impl MatchValue {
    /// Evaluate this criterion against an observed attribute value.
    ///
    /// `Regex` is matched as a plain substring search here; a real AX
    /// backend performing the query may apply a full regex engine, but the
    /// core only needs to express the criterion, not execute it — matching
    /// happens on the `AxDriver` side of the boundary for real queries, and
    /// here only for locators resolved purely in-core (fakes, tests).
    pub fn matches(&self, observed: &str) -> bool {
        match self {
            MatchValue::Exact(want) => observed == want,
            MatchValue::Contains(want) => observed.contains(want.as_str()),
            MatchValue::Regex(want) => observed.contains(want.as_str()),
        }
    }
}

/// A set of attribute-name -> match-criterion pairs, all of which must hold.
pub type CriteriaSet = BTreeMap<String, MatchValue>;

/// A structured, serializable query for a single element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    pub criteria: CriteriaSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_hint: Option<Vec<CriteriaSet>>,
    pub max_depth: u32,
}

impl Locator {
    /// Build a locator matching on a single attribute.
    pub fn single(attribute: impl Into<String>, value: MatchValue, max_depth: u32) -> Self {
        let mut criteria = CriteriaSet::new();
        criteria.insert(attribute.into(), value);
        Locator {
            criteria,
            path_hint: None,
            max_depth,
        }
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
