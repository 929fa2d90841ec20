// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of UI concepts the supervisor needs to locate in the
//! target application's accessibility tree.

use serde::{Deserialize, Serialize};

/// A named UI element the Locator Store knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalElement {
    GeneratingIndicatorText,
    ErrorMessagePopup,
    ConnectionErrorIndicator,
    ResumeConnectionButton,
    ForceStopResumeLink,
    MainInputField,
    StopGeneratingButton,
    SidebarActivityArea,
}

impl LogicalElement {
    /// All variants, in the order the Classifier cares about them.
    pub const ALL: [LogicalElement; 8] = [
        LogicalElement::GeneratingIndicatorText,
        LogicalElement::ErrorMessagePopup,
        LogicalElement::ConnectionErrorIndicator,
        LogicalElement::ResumeConnectionButton,
        LogicalElement::ForceStopResumeLink,
        LogicalElement::MainInputField,
        LogicalElement::StopGeneratingButton,
        LogicalElement::SidebarActivityArea,
    ];

    /// Human-readable name used in `Unrecoverable` reasons and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            LogicalElement::GeneratingIndicatorText => "generating indicator",
            LogicalElement::ErrorMessagePopup => "error message popup",
            LogicalElement::ConnectionErrorIndicator => "connection error indicator",
            LogicalElement::ResumeConnectionButton => "'Resume connection' button",
            LogicalElement::ForceStopResumeLink => "'Force-Stop Resume' link",
            LogicalElement::MainInputField => "main input field",
            LogicalElement::StopGeneratingButton => "'Stop Generating' button",
            LogicalElement::SidebarActivityArea => "sidebar activity area",
        }
    }
}

impl std::fmt::Display for LogicalElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
#[path = "logical_element_tests.rs"]
mod tests;
