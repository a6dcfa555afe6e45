mod frame;
mod null_renderer;
mod primitives;

pub use frame::{ChartFrame, PanelFrame, TooltipContent, TooltipFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TrendPalette};

use crate::error::ChartResult;
use crate::interaction::TooltipSize;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `PanelFrame` so
/// drawing code stays isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &PanelFrame) -> ChartResult<()>;

    /// Size of the tooltip as laid out by the last render, when known.
    fn measured_tooltip(&self) -> Option<TooltipSize> {
        None
    }
}
