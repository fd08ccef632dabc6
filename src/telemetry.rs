//! Telemetry helpers for applications embedding `degurba-rs`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! [`init_default_tracing`] once at startup or install their own
//! `tracing` subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter is read from `RUST_LOG` and falls back to `info`. Returns `true`
/// when initialization succeeds, `false` when the feature is disabled or a
/// global subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        init_tracing_with_filter("info")
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Initializes a `tracing` subscriber with an explicit filter directive, e.g.
/// `"degurba_rs=debug"`.
///
/// `RUST_LOG` still wins when set, so deployed dashboards can raise verbosity
/// without a rebuild.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_tracing_with_filter(default_filter: &str) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
