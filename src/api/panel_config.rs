use serde::{Deserialize, Serialize};

use crate::core::{RangeWindow, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipPlacementConfig;
use crate::render::TrendPalette;

/// Public panel bootstrap configuration.
///
/// This type is serializable so host applications can persist/load panel setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Initial container size.
    pub viewport: Viewport,
    /// Fixed internal coordinate system of the drawing surface. When `None`
    /// the surface tracks the container size one-to-one.
    #[serde(default)]
    pub surface: Option<Viewport>,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub default_window: RangeWindow,
    #[serde(default)]
    pub palette: TrendPalette,
    #[serde(default)]
    pub tooltip: TooltipPlacementConfig,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_terminal_radius")]
    pub terminal_radius: f64,
}

impl PanelConfig {
    /// Creates a config with default styling for the given surface size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface: None,
            padding: default_padding(),
            default_window: RangeWindow::default(),
            palette: TrendPalette::default(),
            tooltip: TooltipPlacementConfig::default(),
            stroke_width: default_stroke_width(),
            terminal_radius: default_terminal_radius(),
        }
    }

    #[must_use]
    pub fn with_fixed_surface(mut self, surface: Viewport) -> Self {
        self.surface = Some(surface);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_default_window(mut self, window: RangeWindow) -> Self {
        self.default_window = window;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: TrendPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipPlacementConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Checks styling values. A zero-area viewport is allowed: it yields a
    /// placeholder until the first resize.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.width.is_finite()
            || !self.viewport.height.is_finite()
            || self.viewport.width < 0.0
            || self.viewport.height < 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(surface) = self.surface {
            if !surface.is_valid() {
                return Err(ChartError::InvalidViewport {
                    width: surface.width,
                    height: surface.height,
                });
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidConfig(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.terminal_radius.is_finite() || self.terminal_radius < 0.0 {
            return Err(ChartError::InvalidConfig(
                "terminal radius must be finite and >= 0".to_owned(),
            ));
        }
        self.palette.validate()?;
        self.tooltip.validate()?;
        Ok(self)
    }
}

fn default_padding() -> f64 {
    8.0
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_terminal_radius() -> f64 {
    4.0
}
