//! Tracing setup for hosts embedding the dashboard core.
//!
//! Nothing is installed implicitly. Call `init_default_tracing` from a demo or
//! test harness, or register your own subscriber and filters.

/// Installs a compact `tracing` fmt subscriber (feature `telemetry`).
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already registered.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
