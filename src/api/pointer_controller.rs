use tracing::trace;

use crate::interaction::{TooltipOverlay, TooltipSize, resolve_pointer};
use crate::render::Renderer;

use super::PortfolioValuePanel;
use super::collaborators::Clock;

impl<R: Renderer, C: Clock> PortfolioValuePanel<R, C> {
    /// Pointer moved to container coordinates `(x, y)`.
    ///
    /// Positions outside the surface still resolve through the clamped
    /// inverse mapping; only `pointer_leave` hides the overlay. Non-finite
    /// coordinates are dropped and the previous active point is kept.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.ignore_after_teardown("pointer_move") {
            return;
        }
        if !x.is_finite() || !y.is_finite() {
            trace!(x, y, "ignoring non-finite pointer position");
            return;
        }
        self.pointer = Some((x, y));
        self.refresh_overlay();
    }

    pub fn pointer_leave(&mut self) {
        if self.ignore_after_teardown("pointer_leave") {
            return;
        }
        trace!("pointer left surface");
        self.pointer = None;
        self.overlay = TooltipOverlay::Hidden;
    }

    /// Records the tooltip's laid-out size and re-runs placement.
    pub fn measure_tooltip(&mut self, size: TooltipSize) {
        if self.ignore_after_teardown("measure_tooltip") {
            return;
        }
        self.tooltip_size = size.sanitized();
        self.place_overlay();
    }

    /// Re-resolves the active point against the current geometry.
    pub(super) fn refresh_overlay(&mut self) {
        let mapping = self.surface_mapping();
        let point = match (self.pointer, &self.geometry) {
            (Some((x, y)), Ok(geometry)) => {
                let (surface_x, _) = mapping.container_to_surface(x, y);
                if surface_x.is_finite() {
                    let point =
                        resolve_pointer(surface_x, &geometry.scale, &geometry.series, mapping);
                    trace!(
                        pointer_x = surface_x,
                        over_surface = mapping.contains(x, y),
                        timestamp = point.sample.timestamp,
                        "resolved active point"
                    );
                    Some(point)
                } else {
                    None
                }
            }
            _ => None,
        };
        self.overlay = TooltipOverlay::from_point(
            point,
            self.tooltip_size,
            self.container,
            self.config.tooltip,
        );
    }

    fn place_overlay(&mut self) {
        self.overlay = TooltipOverlay::from_point(
            self.overlay.active_point(),
            self.tooltip_size,
            self.container,
            self.config.tooltip,
        );
    }
}
