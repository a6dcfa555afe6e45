mod collaborators;
mod event_queue;
mod json_contract;
mod lifecycle;
mod panel;
mod panel_config;
mod panel_snapshot;
mod pointer_controller;
mod render_coordinator;

pub use collaborators::{
    Clock, DismissalStore, FixedClock, MemoryDismissalStore, PatternTimeFormatter,
    PrefixValueFormatter, SystemClock, TimeFormatter, ValueFormatter, tooltip_content,
};
pub use event_queue::{PanelEvent, PanelEventQueue};
pub use json_contract::{
    PANEL_CONFIG_JSON_SCHEMA_V1, PANEL_SNAPSHOT_JSON_SCHEMA_V1, PanelConfigJsonContractV1,
    PanelSnapshotJsonContractV1,
};
pub use lifecycle::{RequestGuard, RequestTicket};
pub use panel::{ChartGeometry, PortfolioValuePanel};
pub use panel_config::PanelConfig;
pub use panel_snapshot::PanelSnapshot;
