use serde::{Deserialize, Serialize};

use crate::core::{NoChart, PathVertex, Trend, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipPlacement;
use crate::render::{Color, LinePrimitive};

/// Formatted text shown inside the tooltip overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub value: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipFrame {
    pub placement: TooltipPlacement,
    pub content: TooltipContent,
}

/// Series drawing plus the pointer overlay, all in surface coordinates except
/// the tooltip placement, which is container-relative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub viewport: Viewport,
    pub stroke: Vec<PathVertex>,
    pub area: Vec<PathVertex>,
    pub stroke_path_data: String,
    pub area_path_data: String,
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub trend: Trend,
    pub terminal: PathVertex,
    pub terminal_radius: f64,
    pub guide_line: Option<LinePrimitive>,
    pub active_marker: Option<PathVertex>,
    pub tooltip: Option<TooltipFrame>,
}

/// Backend-agnostic scene for one panel draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelFrame {
    /// Nothing to plot; hosts draw a neutral placeholder.
    Placeholder { viewport: Viewport, reason: NoChart },
    Chart(ChartFrame),
}

impl PanelFrame {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Placeholder { viewport, .. } => *viewport,
            Self::Chart(frame) => frame.viewport,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    #[must_use]
    pub fn as_chart(&self) -> Option<&ChartFrame> {
        match self {
            Self::Chart(frame) => Some(frame),
            Self::Placeholder { .. } => None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let Self::Chart(frame) = self else {
            return Ok(());
        };

        if !frame.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: frame.viewport.width,
                height: frame.viewport.height,
            });
        }
        if frame.stroke.len() < 2 {
            return Err(ChartError::InvalidData(
                "chart frame needs at least two stroke vertices".to_owned(),
            ));
        }

        let vertices = frame
            .stroke
            .iter()
            .chain(frame.area.iter())
            .chain(std::iter::once(&frame.terminal))
            .chain(frame.active_marker.iter());
        for vertex in vertices {
            if !vertex.is_finite() {
                return Err(ChartError::InvalidData(
                    "path vertices must be finite".to_owned(),
                ));
            }
        }

        if !frame.stroke_width.is_finite() || frame.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !frame.terminal_radius.is_finite() || frame.terminal_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "terminal radius must be finite and >= 0".to_owned(),
            ));
        }
        frame.stroke_color.validate()?;
        frame.fill_color.validate()?;

        if let Some(line) = frame.guide_line {
            line.validate()?;
        }
        if let Some(tooltip) = &frame.tooltip {
            if !tooltip.placement.left.is_finite() || !tooltip.placement.top.is_finite() {
                return Err(ChartError::InvalidData(
                    "tooltip placement must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }
}
