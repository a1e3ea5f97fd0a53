//! Telemetry helpers for hosts embedding `realtime-line-chart`.
//!
//! Tracing setup stays opt-in. Hosts can call `init_default_tracing` or
//! install their own `tracing` subscriber and filters.

/// Installs a compact, env-filtered `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// Returns `true` when initialization succeeds and `false` when the feature is
/// disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
