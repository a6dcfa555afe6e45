mod tooltip;

pub use tooltip::{
    TooltipOverlay, TooltipPlacement, TooltipPlacementConfig, TooltipSide, TooltipSize,
    place_tooltip,
};

use serde::{Deserialize, Serialize};

use crate::core::{FilteredSeries, Sample, SeriesScale, Viewport};

/// Relation between the drawing surface's internal coordinates and where it is
/// rendered inside its container.
///
/// A surface laid out with an internal size of `surface` but displayed at
/// `rendered` size is stretched by `rendered / surface` on each axis, then
/// shifted by `offset` inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMapping {
    pub surface: Viewport,
    pub rendered: Viewport,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SurfaceMapping {
    /// Surface rendered 1:1 at the container origin.
    #[must_use]
    pub fn identity(surface: Viewport) -> Self {
        Self {
            surface,
            rendered: surface,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_rendered(mut self, rendered: Viewport) -> Self {
        self.rendered = rendered;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    fn ratio_x(self) -> f64 {
        axis_ratio(self.rendered.width, self.surface.width)
    }

    fn ratio_y(self) -> f64 {
        axis_ratio(self.rendered.height, self.surface.height)
    }

    #[must_use]
    pub fn surface_to_container(self, x: f64, y: f64) -> (f64, f64) {
        (
            self.offset_x + x * self.ratio_x(),
            self.offset_y + y * self.ratio_y(),
        )
    }

    #[must_use]
    pub fn container_to_surface(self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.offset_x) / self.ratio_x(),
            (y - self.offset_y) / self.ratio_y(),
        )
    }

    /// Whether a container point lies over the rendered surface.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.offset_x
            && x <= self.offset_x + self.rendered.width
            && y >= self.offset_y
            && y <= self.offset_y + self.rendered.height
    }
}

fn axis_ratio(rendered: f64, surface: f64) -> f64 {
    if surface > 0.0 && rendered.is_finite() && rendered > 0.0 {
        rendered / surface
    } else {
        1.0
    }
}

/// Pointer-resolved sample with everything an overlay needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePoint {
    /// Raw pointer x in surface units, for the vertical guide line.
    pub pointer_x: f64,
    pub sample_x: f64,
    pub sample_y: f64,
    pub container_x: f64,
    pub container_y: f64,
    pub sample: Sample,
}

/// Resolves a surface pointer x to the nearest sample by timestamp.
///
/// The pointer is inverted through the time scale (clamped to the series
/// span), then a linear scan keeps the first sample with the smallest
/// absolute timestamp difference, so exact ties go to the earlier sample.
#[must_use]
pub fn resolve_pointer(
    pointer_x: f64,
    scale: &SeriesScale,
    series: &FilteredSeries,
    mapping: SurfaceMapping,
) -> ActivePoint {
    let target = scale.x_to_time(pointer_x);

    let mut best = series.first();
    let mut best_distance = u64::MAX;
    for sample in series.samples() {
        let distance = sample.timestamp.abs_diff(target);
        if distance < best_distance {
            best_distance = distance;
            best = *sample;
        }
    }

    let sample_x = scale.time_to_x(best.timestamp);
    let sample_y = scale.value_to_y(best.value);
    let (container_x, container_y) = mapping.surface_to_container(sample_x, sample_y);

    ActivePoint {
        pointer_x,
        sample_x,
        sample_y,
        container_x,
        container_y,
        sample: best,
    }
}
