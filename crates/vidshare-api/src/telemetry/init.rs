use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "vidshare=debug,tower_http=debug";

/// Initialize console tracing. Safe to call more than once; later calls are no-ops.
pub fn init_telemetry(environment: &str) {
    // Console: compact format, structured fields inline
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    let initialized = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(console_fmt)
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!(environment = %environment, "Tracing initialized");
    }
}

pub async fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}
