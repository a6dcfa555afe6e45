use serde::{Deserialize, Serialize};

use crate::core::{NoChart, PathVertex, RangeWindow, Trend, Viewport};
use crate::interaction::{TooltipOverlay, TooltipSize};
use crate::render::Renderer;

use super::PortfolioValuePanel;
use super::collaborators::Clock;

/// Serializable panel state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub window: RangeWindow,
    pub container: Viewport,
    pub surface: Viewport,
    pub sample_count: usize,
    pub filtered_count: Option<usize>,
    pub no_chart: Option<NoChart>,
    pub trend: Option<Trend>,
    pub terminal: Option<PathVertex>,
    pub stroke_path_data: Option<String>,
    pub overlay: TooltipOverlay,
    pub tooltip_size: TooltipSize,
    pub insight: Option<String>,
}

impl<R: Renderer, C: Clock> PortfolioValuePanel<R, C> {
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        let geometry = self.geometry.as_ref().ok();
        PanelSnapshot {
            window: self.window,
            container: self.container,
            surface: self.surface(),
            sample_count: self.samples.len(),
            filtered_count: geometry.map(|g| g.series.len()),
            no_chart: self.geometry.as_ref().err().copied(),
            trend: geometry.map(|g| g.path.trend),
            terminal: geometry.map(|g| g.path.terminal),
            stroke_path_data: geometry.map(|g| g.path.stroke_path_data()),
            overlay: self.overlay,
            tooltip_size: self.tooltip_size,
            insight: self.insight.clone(),
        }
    }
}
