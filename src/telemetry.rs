//! Telemetry helpers for applications embedding `folio-chart`.
//!
//! The panel emits `tracing` events for recomputes, pointer resolution and
//! ignored post-teardown input. Hosts either call `init_default_tracing` or
//! install their own subscriber.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is on.
///
/// The filter comes from `RUST_LOG`, falling back to `folio_chart=info`.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio_chart=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
