use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Sample, Viewport};
use crate::error::ChartError;

/// Lookback window offered by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeWindow {
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl RangeWindow {
    /// Windows in selector order.
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Quarter];

    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::days(self.days())
    }

    #[must_use]
    pub fn duration_ms(self) -> i64 {
        self.duration().num_milliseconds()
    }

    /// Oldest timestamp kept when filtering at `now_ms`.
    #[must_use]
    pub fn cutoff(self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.duration_ms())
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "1d",
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }
}

impl fmt::Display for RangeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangeWindow {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|window| window.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::InvalidData(format!("unknown range window `{s}`")))
    }
}

/// Reason no chart can be drawn for the current inputs.
///
/// Hosts render a neutral placeholder for either variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum NoChart {
    #[error("fewer than two usable samples in window")]
    EmptySeries,
    #[error("drawing surface has no area")]
    NoSurface,
}

/// Chronologically ordered, finite-valued samples inside one range window.
///
/// Always holds at least two samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredSeries {
    window: RangeWindow,
    cutoff: i64,
    samples: Vec<Sample>,
}

impl FilteredSeries {
    #[must_use]
    pub fn window(&self) -> RangeWindow {
        self.window
    }

    #[must_use]
    pub fn cutoff(&self) -> i64 {
        self.cutoff
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Sample {
        self.samples[0]
    }

    #[must_use]
    pub fn last(&self) -> Sample {
        self.samples[self.samples.len() - 1]
    }

    /// `(min_time, max_time)` over the series.
    #[must_use]
    pub fn time_bounds(&self) -> (i64, i64) {
        // Sorted by timestamp on construction.
        (self.first().timestamp, self.last().timestamp)
    }

    /// `(min_value, max_value)` over the series.
    #[must_use]
    pub fn value_bounds(&self) -> (f64, f64) {
        let values = self.samples.iter().map(|sample| OrderedFloat(sample.value));
        let min = values.clone().min().map_or(0.0, |v| v.0);
        let max = values.max().map_or(0.0, |v| v.0);
        (min, max)
    }
}

/// Selects the samples inside `window`, measured back from `now_ms`.
///
/// Non-finite values are dropped. The survivors are stably sorted by
/// timestamp, so equal timestamps keep their caller order.
pub fn filter_series(
    samples: &[Sample],
    window: RangeWindow,
    now_ms: i64,
    viewport: Viewport,
) -> Result<FilteredSeries, NoChart> {
    if !viewport.is_valid() {
        return Err(NoChart::NoSurface);
    }

    let cutoff = window.cutoff(now_ms);
    let mut kept: Vec<Sample> = samples
        .iter()
        .copied()
        .filter(|sample| sample.timestamp >= cutoff && sample.value.is_finite())
        .collect();

    if kept.len() < 2 {
        return Err(NoChart::EmptySeries);
    }

    kept.sort_by_key(|sample| sample.timestamp);

    Ok(FilteredSeries {
        window,
        cutoff,
        samples: kept,
    })
}
