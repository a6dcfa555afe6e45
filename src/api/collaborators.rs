//! Interfaces to the dashboard pieces that live outside the chart engine.
//!
//! The engine only consumes plain values from these; the default
//! implementations exist for headless hosts and tests.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::render::TooltipContent;

/// Source of "now" for range filtering, in epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl FixedClock {
    #[must_use]
    pub fn at(time: DateTime<Utc>) -> Self {
        Self(time.timestamp_millis())
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Formats a monetary value for the tooltip.
pub trait ValueFormatter {
    fn format_value(&self, value: f64) -> String;
}

/// Formats a sample timestamp for the tooltip.
pub trait TimeFormatter {
    fn format_time(&self, timestamp_ms: i64) -> String;
}

/// Fixed two-decimal amount with a currency prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixValueFormatter {
    pub prefix: String,
}

impl Default for PrefixValueFormatter {
    fn default() -> Self {
        Self {
            prefix: "$".to_owned(),
        }
    }
}

impl ValueFormatter for PrefixValueFormatter {
    fn format_value(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}{:.2}", self.prefix, value.abs())
        } else {
            format!("{}{value:.2}", self.prefix)
        }
    }
}

/// `chrono` strftime pattern evaluated in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTimeFormatter {
    pub pattern: String,
}

impl Default for PatternTimeFormatter {
    fn default() -> Self {
        Self {
            pattern: "%b %-d, %Y %H:%M".to_owned(),
        }
    }
}

impl TimeFormatter for PatternTimeFormatter {
    fn format_time(&self, timestamp_ms: i64) -> String {
        let Some(time) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
            return timestamp_ms.to_string();
        };
        // An invalid pattern surfaces as a formatting error rather than a panic.
        let mut out = String::new();
        match write!(out, "{}", time.format(&self.pattern)) {
            Ok(()) => out,
            Err(_) => time.to_rfc3339(),
        }
    }
}

#[must_use]
pub fn tooltip_content(
    sample: Sample,
    values: &dyn ValueFormatter,
    times: &dyn TimeFormatter,
) -> TooltipContent {
    TooltipContent {
        value: values.format_value(sample.value),
        date: times.format_time(sample.timestamp),
    }
}

/// Persistence for "dismissed" flags of dashboard panels, scoped per user.
pub trait DismissalStore {
    fn is_dismissed(&self, user_id: &str, key: &str) -> bool;
    fn dismiss(&mut self, user_id: &str, key: &str);
    fn reset(&mut self, user_id: &str);
}

/// In-memory store; serializable so hosts can persist it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDismissalStore {
    by_user: IndexMap<String, IndexSet<String>>,
}

impl MemoryDismissalStore {
    #[must_use]
    pub fn dismissed_keys(&self, user_id: &str) -> Vec<&str> {
        self.by_user
            .get(user_id)
            .map(|keys| keys.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl DismissalStore for MemoryDismissalStore {
    fn is_dismissed(&self, user_id: &str, key: &str) -> bool {
        self.by_user
            .get(user_id)
            .is_some_and(|keys| keys.contains(key))
    }

    fn dismiss(&mut self, user_id: &str, key: &str) {
        self.by_user
            .entry(user_id.to_owned())
            .or_default()
            .insert(key.to_owned());
    }

    fn reset(&mut self, user_id: &str) {
        self.by_user.shift_remove(user_id);
    }
}
