use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{RangeWindow, Viewport};
use crate::interaction::TooltipSize;

/// Input event consumed by the panel, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEvent {
    Resize { viewport: Viewport },
    SelectWindow { window: RangeWindow },
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    TooltipMeasured { size: TooltipSize },
}

/// FIFO of pending panel events.
///
/// Back-to-back resizes collapse into the latest one; any other event in
/// between keeps both, so ordering relative to pointer input is preserved.
#[derive(Debug, Clone, Default)]
pub struct PanelEventQueue {
    events: VecDeque<PanelEvent>,
}

impl PanelEventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PanelEvent) {
        if matches!(event, PanelEvent::Resize { .. }) {
            if let Some(last) = self.events.back_mut() {
                if matches!(last, PanelEvent::Resize { .. }) {
                    *last = event;
                    return;
                }
            }
        }
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<PanelEvent> {
        self.events.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<PanelEvent> for PanelEventQueue {
    fn extend<T: IntoIterator<Item = PanelEvent>>(&mut self, iter: T) {
        for event in iter {
            self.push(event);
        }
    }
}
