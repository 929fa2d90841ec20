// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read-only per-tick configuration snapshot. Loading this from a TOML
//! file on disk is a daemon concern (`sentinel-daemon::config`); this module
//! only defines the shape and its documented defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Parse a short human-written duration like `"30s"`, `"5m"`, `"1h"`.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.find(|c: char| !c.is_ascii_digit()).ok_or_else(|| {
        format!("duration '{s}' has no unit (expected a suffix like s/m/h)")
    })?);
    let n: u64 = num
        .parse()
        .map_err(|_| format!("duration '{s}' has a non-numeric amount"))?;
    match unit {
        "ms" => Ok(Duration::from_millis(n)),
        "s" => Ok(Duration::from_secs(n)),
        "m" => Ok(Duration::from_secs(n * 60)),
        "h" => Ok(Duration::from_secs(n * 3600)),
        other => Err(format!("duration '{s}' has unknown unit '{other}'")),
    }
}

mod duration_secs_serde {
    use super::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Ok(Duration::from_secs_f64(secs))
    }
}

/// Read-only configuration snapshot consumed by one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisorConfig {
    #[serde(with = "duration_secs_serde")]
    pub tick_interval: Duration,
    pub max_interventions_per_positive: u32,
    pub max_connection_resume_clicks: u32,
    pub max_consecutive_recovery_failures: u32,
    #[serde(with = "duration_secs_serde")]
    pub stuck_timeout: Duration,
    #[serde(with = "duration_secs_serde")]
    pub observation_window: Duration,

    pub connection_recovery_enabled: bool,
    pub force_stop_recovery_enabled: bool,
    pub stuck_recovery_enabled: bool,
    pub sidebar_monitoring_enabled: bool,
    pub sound_on_intervention: bool,
    pub notification_on_persistent_error: bool,

    pub nudge_text: String,

    /// Case-insensitive substring markers for "the target is actively
    /// working" text (step 6 of the Classifier).
    pub positive_work_keywords: Vec<String>,
    /// Case-insensitive substring markers for a connection-issue message
    /// (step 8).
    pub connection_issue_keywords: Vec<String>,
    /// Case-insensitive substring markers for a general stuck/error message
    /// (step 10).
    pub stuck_message_keywords: Vec<String>,

    /// How many of the sidebar's visible children feed the fingerprint.
    pub sidebar_fingerprint_children: usize,
    /// Delimiter joining child text before hashing.
    pub sidebar_fingerprint_delimiter: String,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        SupervisorConfig {
            tick_interval: Duration::from_secs(1),
            max_interventions_per_positive: 5,
            max_connection_resume_clicks: 3,
            max_consecutive_recovery_failures: 3,
            stuck_timeout: Duration::from_secs(60),
            observation_window: Duration::from_secs(3),

            connection_recovery_enabled: true,
            force_stop_recovery_enabled: true,
            stuck_recovery_enabled: true,
            sidebar_monitoring_enabled: true,
            sound_on_intervention: true,
            notification_on_persistent_error: true,

            nudge_text: "Please continue.".to_string(),

            positive_work_keywords: vec![
                "Generating".to_string(),
                "Thinking".to_string(),
                "Processing".to_string(),
                "Working".to_string(),
                "Running".to_string(),
                "Analyzing".to_string(),
            ],
            connection_issue_keywords: vec![
                "connection".to_string(),
                "reconnect".to_string(),
                "network error".to_string(),
            ],
            stuck_message_keywords: vec![
                "error".to_string(),
                "failed".to_string(),
                "something went wrong".to_string(),
            ],

            sidebar_fingerprint_children: 3,
            sidebar_fingerprint_delimiter: "\u{1f}".to_string(),
        }
    }
}

impl SupervisorConfig {
    /// `tick_interval` clamped to the documented supported range (0.5s-5s).
    pub fn clamped_tick_interval(&self) -> Duration {
        let min = Duration::from_millis(500);
        let max = Duration::from_secs(5);
        self.tick_interval.clamp(min, max)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
