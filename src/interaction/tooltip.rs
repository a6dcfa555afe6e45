use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::ActivePoint;

/// Measured size of the rendered tooltip overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl TooltipSize {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Negative or non-finite measurements collapse to zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(clean(self.width), clean(self.height))
    }
}

/// Tuning for tooltip placement around the active point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacementConfig {
    /// Vertical distance between the point and the tooltip edge.
    pub gap: f64,
    /// Minimum distance kept from the left and right container edges.
    pub edge_margin: f64,
}

impl Default for TooltipPlacementConfig {
    fn default() -> Self {
        Self {
            gap: 10.0,
            edge_margin: 5.0,
        }
    }
}

impl TooltipPlacementConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ChartError::InvalidConfig(
                "tooltip gap must be finite and >= 0".to_owned(),
            ));
        }
        if !self.edge_margin.is_finite() || self.edge_margin < 0.0 {
            return Err(ChartError::InvalidConfig(
                "tooltip edge margin must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipSide {
    Above,
    Below,
}

/// Top-left offset of the tooltip inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
    pub side: TooltipSide,
}

/// Places a tooltip of `size` next to the container point `(x, y)`.
///
/// Horizontally the tooltip is centered on `x`, then clamped into
/// `[edge_margin, container.width - size.width - edge_margin]`; a container
/// too narrow for that interval pins the tooltip to the left margin.
/// Vertically it sits `gap` above the point and flips below when the top
/// edge would go negative.
#[must_use]
pub fn place_tooltip(
    x: f64,
    y: f64,
    size: TooltipSize,
    container: Viewport,
    config: TooltipPlacementConfig,
) -> TooltipPlacement {
    let size = size.sanitized();
    let min_left = config.edge_margin;
    let max_left = container.width - size.width - config.edge_margin;

    let centered = x - size.width / 2.0;
    let left = if max_left < min_left {
        min_left
    } else {
        centered.clamp(min_left, max_left)
    };

    let above = y - size.height - config.gap;
    let (top, side) = if above < 0.0 {
        (y + config.gap, TooltipSide::Below)
    } else {
        (above, TooltipSide::Above)
    };

    TooltipPlacement { left, top, side }
}

/// Overlay state: hidden without an active point, visible with one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TooltipOverlay {
    #[default]
    Hidden,
    Visible {
        point: ActivePoint,
        placement: TooltipPlacement,
    },
}

impl TooltipOverlay {
    /// Derives the overlay purely from the presence of an active point.
    #[must_use]
    pub fn from_point(
        point: Option<ActivePoint>,
        size: TooltipSize,
        container: Viewport,
        config: TooltipPlacementConfig,
    ) -> Self {
        match point {
            Some(point) => Self::Visible {
                point,
                placement: place_tooltip(
                    point.container_x,
                    point.container_y,
                    size,
                    container,
                    config,
                ),
            },
            None => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    #[must_use]
    pub fn active_point(&self) -> Option<ActivePoint> {
        match self {
            Self::Visible { point, .. } => Some(*point),
            Self::Hidden => None,
        }
    }

    #[must_use]
    pub fn placement(&self) -> Option<TooltipPlacement> {
        match self {
            Self::Visible { placement, .. } => Some(*placement),
            Self::Hidden => None,
        }
    }
}
