use crate::error::ChartResult;
use crate::interaction::TooltipSize;
use crate::render::{PanelFrame, Renderer};

/// No-op renderer used by tests and headless panel usage.
///
/// It still validates frame content so tests catch invalid geometry, and it
/// can report a fixed tooltip measurement to stand in for real layout.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_stroke_vertex_count: usize,
    pub last_was_placeholder: bool,
    pub tooltip_size: Option<TooltipSize>,
}

impl NullRenderer {
    #[must_use]
    pub fn with_tooltip_size(size: TooltipSize) -> Self {
        Self {
            tooltip_size: Some(size),
            ..Self::default()
        }
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &PanelFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_was_placeholder = frame.is_placeholder();
        self.last_stroke_vertex_count = frame.as_chart().map_or(0, |chart| chart.stroke.len());
        Ok(())
    }

    fn measured_tooltip(&self) -> Option<TooltipSize> {
        self.tooltip_size
    }
}
