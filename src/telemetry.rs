//! Tracing setup for hosts embedding `chart-compiler`.
//!
//! The compiler only emits `tracing` events. Hosts either call
//! `init_default_tracing` or install their own subscriber and filters.

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default `warn`)
/// when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
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
