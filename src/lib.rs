//! folio-chart: interactive portfolio-value chart engine.
//!
//! Raw value samples flow through a pure pipeline (range filter, scale,
//! path) into a backend-agnostic frame; pointer input resolves to the
//! nearest sample and a tooltip placement that stays inside its container.
//! `PortfolioValuePanel` hosts the pipeline and owns the only mutable state.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PanelConfig, PortfolioValuePanel};
pub use error::{ChartError, ChartResult};
