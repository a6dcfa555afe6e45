use serde::{Deserialize, Serialize};

use crate::core::{FilteredSeries, Viewport};

/// Affine map from a closed domain interval onto a closed pixel interval.
///
/// A zero-width domain maps every input to the midpoint of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_end == self.domain_start
    }

    /// Maps a domain value onto the range, clamped to the range bounds.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = normalize(value, self.domain_start, self.domain_end);
        if !normalized.is_finite() {
            return (self.range_start + self.range_end) / 2.0;
        }
        let pixel = self.range_start + normalized * (self.range_end - self.range_start);
        pixel.clamp(
            self.range_start.min(self.range_end),
            self.range_start.max(self.range_end),
        )
    }

    /// Inverse of [`Self::domain_to_pixel`], clamped to the domain.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        if self.is_degenerate() || self.range_end == self.range_start || pixel.is_nan() {
            return self.domain_start;
        }
        let normalized =
            ((pixel - self.range_start) / (self.range_end - self.range_start)).clamp(0.0, 1.0);
        let value = interpolate(self.domain_start, self.domain_end, normalized);
        value.clamp(
            self.domain_start.min(self.domain_end),
            self.domain_start.max(self.domain_end),
        )
    }
}

/// Position of `value` within `[start, end]` as a fraction.
///
/// Endpoints far enough apart to overflow `end - start` are halved first.
fn normalize(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.is_finite() {
        (value - start) / span
    } else {
        (value / 2.0 - start / 2.0) / (end / 2.0 - start / 2.0)
    }
}

fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    let span = end - start;
    if span.is_finite() {
        start + t * span
    } else {
        start * (1.0 - t) + end * t
    }
}

/// Time and value transforms for one filtered series on one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesScale {
    viewport: Viewport,
    padding: f64,
    time: LinearScale,
    value: LinearScale,
}

impl SeriesScale {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Effective inset after clamping to the surface size.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn time_scale(&self) -> LinearScale {
        self.time
    }

    #[must_use]
    pub fn value_scale(&self) -> LinearScale {
        self.value
    }

    #[must_use]
    pub fn time_to_x(&self, timestamp: i64) -> f64 {
        self.time.domain_to_pixel(timestamp as f64)
    }

    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.value.domain_to_pixel(value)
    }

    /// Timestamp under surface x, clamped to the series time span.
    #[must_use]
    pub fn x_to_time(&self, x: f64) -> i64 {
        self.time.pixel_to_domain(x).round() as i64
    }

    /// Bottom edge of the surface, used as the area-fill baseline.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.viewport.height
    }
}

/// Derives the scale for `series` drawn into `viewport` with a symmetric inset.
///
/// Pure: identical inputs always produce an identical scale.
#[must_use]
pub fn build_scale(series: &FilteredSeries, viewport: Viewport, padding: f64) -> SeriesScale {
    let max_padding = viewport.width.min(viewport.height) / 2.0;
    let padding = if padding.is_finite() {
        padding.clamp(0.0, max_padding.max(0.0))
    } else {
        0.0
    };

    let (min_time, max_time) = series.time_bounds();
    let (min_value, max_value) = series.value_bounds();

    let time = LinearScale::new(
        (min_time as f64, max_time as f64),
        (padding, viewport.width - padding),
    );
    // Inverted: larger values sit closer to the top edge.
    let value = LinearScale::new(
        (min_value, max_value),
        (viewport.height - padding, padding),
    );

    SeriesScale {
        viewport,
        padding,
        time,
        value,
    }
}
