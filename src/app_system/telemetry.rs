use tracing_subscriber::EnvFilter;

use super::SystemConfig;

/// Installs the global subscriber. Call once, at startup.
///
/// `RUST_LOG` wins over the configured level, e.g.
/// `RUST_LOG=cinema_reservations::clients=debug`.
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
