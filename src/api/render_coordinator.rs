use tracing::trace;

use crate::core::PathVertex;
use crate::error::ChartResult;
use crate::render::{ChartFrame, LinePrimitive, PanelFrame, Renderer, TooltipFrame};

use super::PortfolioValuePanel;
use super::collaborators::{Clock, tooltip_content};

const GUIDE_LINE_WIDTH: f64 = 1.0;
const GUIDE_LINE_ALPHA: f64 = 0.5;

impl<R: Renderer, C: Clock> PortfolioValuePanel<R, C> {
    /// Materializes the current drawing instructions without rendering them.
    #[must_use]
    pub fn build_frame(&self) -> PanelFrame {
        let geometry = match &self.geometry {
            Ok(geometry) => geometry,
            Err(reason) => {
                return PanelFrame::Placeholder {
                    viewport: self.surface(),
                    reason: *reason,
                };
            }
        };

        let palette = self.config.palette;
        let trend = geometry.path.trend;
        let stroke_color = palette.stroke(trend);
        let surface = geometry.scale.viewport();

        let (guide_line, active_marker, tooltip) = match self.overlay.active_point() {
            Some(point) => {
                let guide = LinePrimitive::new(
                    point.pointer_x,
                    0.0,
                    point.pointer_x,
                    surface.height,
                    GUIDE_LINE_WIDTH,
                    stroke_color.with_alpha(GUIDE_LINE_ALPHA),
                );
                let tooltip = self.overlay.placement().map(|placement| TooltipFrame {
                    placement,
                    content: tooltip_content(
                        point.sample,
                        self.value_formatter.as_ref(),
                        self.time_formatter.as_ref(),
                    ),
                });
                (
                    Some(guide),
                    Some(PathVertex::new(point.sample_x, point.sample_y)),
                    tooltip,
                )
            }
            None => (None, None, None),
        };

        PanelFrame::Chart(ChartFrame {
            viewport: surface,
            stroke: geometry.path.stroke.clone(),
            area: geometry.path.area.clone(),
            stroke_path_data: geometry.path.stroke_path_data(),
            area_path_data: geometry.path.area_path_data(),
            stroke_width: self.config.stroke_width,
            stroke_color,
            fill_color: palette.fill(trend),
            trend,
            terminal: geometry.path.terminal,
            terminal_radius: self.config.terminal_radius,
            guide_line,
            active_marker,
            tooltip,
        })
    }

    /// Renders the current frame, then re-places the tooltip with whatever
    /// size the renderer measured.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.ignore_after_teardown("render") {
            return Ok(());
        }
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        trace!(placeholder = frame.is_placeholder(), "rendered panel frame");
        if let Some(size) = self.renderer.measured_tooltip() {
            self.measure_tooltip(size);
        }
        Ok(())
    }
}
