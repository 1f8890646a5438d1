//! Logging setup for the desktop binary.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to the
//! workspace crates and external crates stay at `warn`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once at startup.
pub fn init_logging(level: Level) {
    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(fmt::layer().with_target(true))
        .init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,app={level},ui={level},services={level},storage={level},portal_core={level}")
}
