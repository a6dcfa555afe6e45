use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{FilteredSeries, SeriesScale};

/// Vertex in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Binary direction of the series over the active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    /// `Positive` when `last >= first`, so a flat window reads as positive.
    #[must_use]
    pub fn classify(first: f64, last: f64) -> Self {
        if last >= first {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Deterministic geometry for the portfolio-value series.
///
/// `stroke` follows the samples in timestamp order. `area` is the stroke
/// closed against the bottom edge and explicitly repeats its first vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    pub stroke: Vec<PathVertex>,
    pub area: Vec<PathVertex>,
    pub terminal: PathVertex,
    pub trend: Trend,
}

impl SeriesPath {
    /// SVG path data for the stroke polyline.
    #[must_use]
    pub fn stroke_path_data(&self) -> String {
        path_data(&self.stroke, false)
    }

    /// SVG path data for the closed fill region.
    #[must_use]
    pub fn area_path_data(&self) -> String {
        path_data(&self.area, true)
    }
}

/// Builds stroke and area geometry for `series` under `scale`.
#[must_use]
pub fn build_path(series: &FilteredSeries, scale: &SeriesScale) -> SeriesPath {
    let stroke: Vec<PathVertex> = series
        .samples()
        .iter()
        .map(|sample| {
            PathVertex::new(scale.time_to_x(sample.timestamp), scale.value_to_y(sample.value))
        })
        .collect();

    let first = stroke[0];
    let terminal = stroke[stroke.len() - 1];
    let baseline_y = scale.baseline_y();

    let mut area = Vec::with_capacity(stroke.len() + 3);
    area.extend(stroke.iter().copied());
    area.push(PathVertex::new(terminal.x, baseline_y));
    area.push(PathVertex::new(first.x, baseline_y));
    area.push(first);

    SeriesPath {
        stroke,
        area,
        terminal,
        trend: Trend::classify(series.first().value, series.last().value),
    }
}

fn path_data(vertices: &[PathVertex], close: bool) -> String {
    let mut out = String::with_capacity(vertices.len() * 16);
    for (idx, vertex) in vertices.iter().enumerate() {
        let command = if idx == 0 { 'M' } else { 'L' };
        if idx > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{command}{:.2},{:.2}", vertex.x, vertex.y);
    }
    if close && !vertices.is_empty() {
        out.push_str(" Z");
    }
    out
}
