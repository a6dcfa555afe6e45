use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{
    FilteredSeries, NoChart, RangeWindow, Sample, SeriesPath, SeriesScale, Viewport, build_path,
    build_scale, filter_series,
};
use crate::error::ChartResult;
use crate::interaction::{SurfaceMapping, TooltipOverlay, TooltipSize};
use crate::render::Renderer;

use super::collaborators::{
    Clock, PatternTimeFormatter, PrefixValueFormatter, SystemClock, TimeFormatter,
    ValueFormatter,
};
use super::lifecycle::{RequestGuard, RequestTicket};
use super::{PanelConfig, PanelEvent, PanelEventQueue};

/// Filtered series with the scale and path derived from it.
///
/// Rebuilt as a whole whenever the samples, the window, or the surface size
/// change; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub series: FilteredSeries,
    pub scale: SeriesScale,
    pub path: SeriesPath,
}

impl ChartGeometry {
    /// Runs filter, scale and path for one set of inputs.
    pub fn compute(
        samples: &[Sample],
        window: RangeWindow,
        now_ms: i64,
        surface: Viewport,
        padding: f64,
    ) -> Result<Self, NoChart> {
        let series = filter_series(samples, window, now_ms, surface)?;
        let scale = build_scale(&series, surface, padding);
        let path = build_path(&series, &scale);
        Ok(Self {
            series,
            scale,
            path,
        })
    }
}

/// Portfolio-value panel hosting the chart engine.
///
/// Owns the last-known container size, the active window and the pointer
/// overlay. Every input runs synchronously, so a resize or window change has
/// rebuilt the geometry before the next pointer event is resolved.
pub struct PortfolioValuePanel<R: Renderer, C: Clock = SystemClock> {
    pub(super) renderer: R,
    pub(super) clock: C,
    pub(super) config: PanelConfig,
    pub(super) samples: Vec<Sample>,
    pub(super) window: RangeWindow,
    pub(super) container: Viewport,
    pub(super) geometry: Result<ChartGeometry, NoChart>,
    pub(super) pointer: Option<(f64, f64)>,
    pub(super) overlay: TooltipOverlay,
    pub(super) tooltip_size: TooltipSize,
    pub(super) requests: RequestGuard,
    pub(super) insight: Option<String>,
    pub(super) value_formatter: Box<dyn ValueFormatter>,
    pub(super) time_formatter: Box<dyn TimeFormatter>,
}

impl<R: Renderer> PortfolioValuePanel<R, SystemClock> {
    pub fn new(renderer: R, config: PanelConfig) -> ChartResult<Self> {
        Self::with_clock(renderer, config, SystemClock)
    }
}

impl<R: Renderer, C: Clock> PortfolioValuePanel<R, C> {
    pub fn with_clock(renderer: R, config: PanelConfig, clock: C) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            clock,
            config,
            samples: Vec::new(),
            window: config.default_window,
            container: config.viewport,
            geometry: Err(NoChart::EmptySeries),
            pointer: None,
            overlay: TooltipOverlay::Hidden,
            tooltip_size: TooltipSize::ZERO,
            requests: RequestGuard::default(),
            insight: None,
            value_formatter: Box::new(PrefixValueFormatter::default()),
            time_formatter: Box::new(PatternTimeFormatter::default()),
        })
    }

    #[must_use]
    pub fn config(&self) -> PanelConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn window(&self) -> RangeWindow {
        self.window
    }

    #[must_use]
    pub fn container(&self) -> Viewport {
        self.container
    }

    /// Internal coordinate system of the drawing surface.
    #[must_use]
    pub fn surface(&self) -> Viewport {
        if self.container.is_valid() {
            self.config.surface.unwrap_or(self.container)
        } else {
            self.container
        }
    }

    #[must_use]
    pub fn surface_mapping(&self) -> SurfaceMapping {
        SurfaceMapping::identity(self.surface()).with_rendered(self.container)
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn geometry(&self) -> Result<&ChartGeometry, NoChart> {
        self.geometry.as_ref().map_err(|reason| *reason)
    }

    #[must_use]
    pub fn overlay(&self) -> TooltipOverlay {
        self.overlay
    }

    #[must_use]
    pub fn tooltip_size(&self) -> TooltipSize {
        self.tooltip_size
    }

    #[must_use]
    pub fn insight(&self) -> Option<&str> {
        self.insight.as_deref()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.requests.is_torn_down()
    }

    pub fn set_value_formatter(&mut self, formatter: Box<dyn ValueFormatter>) {
        self.value_formatter = formatter;
    }

    pub fn set_time_formatter(&mut self, formatter: Box<dyn TimeFormatter>) {
        self.time_formatter = formatter;
    }

    /// Replaces the raw samples, as already resolved by the data collaborator.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        if self.ignore_after_teardown("set_samples") {
            return;
        }
        debug!(count = samples.len(), "set portfolio samples");
        self.samples = samples;
        self.recompute();
    }

    pub fn select_window(&mut self, window: RangeWindow) {
        if self.ignore_after_teardown("select_window") {
            return;
        }
        debug!(window = %window, "select range window");
        self.window = window;
        self.recompute();
    }

    /// Applies the latest container size.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.ignore_after_teardown("resize") {
            return;
        }
        if viewport == self.container {
            return;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize container"
        );
        self.container = viewport;
        self.recompute();
    }

    /// Re-filters against the current clock, e.g. on a periodic tick.
    pub fn refresh(&mut self) {
        if self.ignore_after_teardown("refresh") {
            return;
        }
        self.recompute();
    }

    pub fn dispatch(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Resize { viewport } => self.resize(viewport),
            PanelEvent::SelectWindow { window } => self.select_window(window),
            PanelEvent::PointerMove { x, y } => self.pointer_move(x, y),
            PanelEvent::PointerLeave => self.pointer_leave(),
            PanelEvent::TooltipMeasured { size } => self.measure_tooltip(size),
        }
    }

    /// Applies queued events in order until the queue is empty.
    pub fn drain_queue(&mut self, queue: &mut PanelEventQueue) {
        while let Some(event) = queue.pop() {
            self.dispatch(event);
        }
    }

    /// Starts an external insight request; only the latest ticket is honored.
    pub fn begin_insight_request(&mut self) -> RequestTicket {
        self.requests.begin()
    }

    /// Stores insight text if `ticket` is still current and the panel is live.
    ///
    /// Returns whether the text was accepted.
    pub fn complete_insight_request(&mut self, ticket: RequestTicket, text: String) -> bool {
        if !self.requests.accepts(ticket) {
            warn!(
                ticket = ticket.id(),
                torn_down = self.requests.is_torn_down(),
                "ignoring stale insight completion"
            );
            return false;
        }
        self.insight = Some(text);
        true
    }

    /// Detaches the panel; later events and request completions are ignored.
    pub fn teardown(&mut self) {
        debug!("tear down portfolio value panel");
        self.requests.teardown();
        self.pointer = None;
        self.overlay = TooltipOverlay::Hidden;
    }

    pub(super) fn ignore_after_teardown(&self, operation: &'static str) -> bool {
        if self.requests.is_torn_down() {
            warn!(operation, "ignoring event after teardown");
            return true;
        }
        false
    }

    fn recompute(&mut self) {
        let now_ms = self.clock.now_ms();
        self.geometry = ChartGeometry::compute(
            &self.samples,
            self.window,
            now_ms,
            self.surface(),
            self.config.padding,
        );
        match &self.geometry {
            Ok(geometry) => debug!(
                window = %self.window,
                filtered = geometry.series.len(),
                trend = ?geometry.path.trend,
                "recomputed chart geometry"
            ),
            Err(reason) => debug!(window = %self.window, reason = %reason, "no chart"),
        }
        self.refresh_overlay();
    }
}
